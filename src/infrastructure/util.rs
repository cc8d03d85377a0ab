use crate::application::ports::util::SlugGenerator;

/// Derives a slug from a title: lowercase, strip everything that is not a
/// lowercase letter, digit or whitespace, then collapse whitespace runs into
/// single hyphens and trim hyphens at both ends.
#[derive(Default, Clone)]
pub struct TitleSlugGenerator;

impl SlugGenerator for TitleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let kept: String = lowered
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
            .collect();

        kept.split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .trim_matches('-')
            .to_string()
    }
}
