#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the version banner printed on startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `1` hides section headers, `2` also hides the detail trees.
    pub quiet: u8,
}

impl Config {
    pub fn shows_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn shows_details(&self) -> bool {
        self.quiet < 2
    }
}
