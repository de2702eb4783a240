/// Identity of a use case, shared by the backend route and the frontend page
pub trait UseCaseMetadata {
    /// Use case index, e.g. "u508"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "aws_setup"
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u508_aws_setup"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
