/// Trait bundles describing what each algorithm needs from its element type
pub mod traits;
