// crates/cli/src/config.rs
use crate::args::{Command, OpArgs};
pub use mlscaffold_engine::config::{Config, ConfigBuilder};
use mlscaffold_engine::layout::ProjectLayout;
use mlscaffold_engine::options::Operation;

impl From<&Command> for Config {
    fn from(command: &Command) -> Self {
        let operation = match command {
            Command::Create(_) => Operation::Create,
            Command::Clean(_) => Operation::Clean,
        };
        build(operation, command.op_args())
    }
}

fn build(operation: Operation, args: &OpArgs) -> Config {
    ConfigBuilder::default()
        .root(args.root.clone())
        .layout(ProjectLayout::new(args.name.clone()))
        .operation(operation)
        .strict(args.strict)
        .build()
        .expect("Failed to build config")
}
