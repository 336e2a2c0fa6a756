/// A subcommand that can be executed once its arguments are parsed.
pub trait Run {
    fn run(self) -> anyhow::Result<()>;
}
