// src/application/ports/util.rs
/// Transliterates and slugifies free text into a URL-safe identifier.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
