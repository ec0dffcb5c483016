pub mod store;
pub mod system;
pub mod wizard;

use super::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(wizard::definitions());
    commands.extend(store::definitions());
    commands
}
