/// YAML front matter delimited by `---` lines at the very start of a document.
pub struct FrontMatter;

impl FrontMatter {
    pub const FENCE: &'static str = "---";

    pub fn is_fence(line: &str) -> bool {
        line.trim_end() == Self::FENCE
    }
}
