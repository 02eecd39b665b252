pub mod deutsch_jozsa; // constant-vs-balanced pipeline
pub mod oracle; // reversible oracles from classical functions
