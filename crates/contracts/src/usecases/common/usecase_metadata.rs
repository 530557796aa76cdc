/// On-screen labels of a UseCase
pub trait UseCaseMetadata {
    /// Display name for the UI (e.g. "AI Code Reviewer")
    fn display_name() -> &'static str;

    /// Short description shown under the display name
    fn description() -> &'static str {
        ""
    }
}
