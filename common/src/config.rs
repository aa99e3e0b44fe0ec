pub struct Config {
    /// Suppresses the banner printed before command output.
    pub no_banner: bool,
    /// Verbosity reduction requested with `-q`.
    ///
    /// `0` prints everything, `1` drops headers and separators, `2` prints identity codes only.
    pub quiet: u8,
}
