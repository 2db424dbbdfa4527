mod switch;
pub use switch::Switch;

mod min_messages;
pub use min_messages::MinMessages;

mod rotation_age;
pub use rotation_age::RotationAge;
