pub mod list;
pub mod locate;
pub mod scaffold;
