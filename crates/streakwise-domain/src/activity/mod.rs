mod value_objects;

#[cfg(test)]
mod value_objects_test;

pub use value_objects::{parse_events, ActivityEvent, ActivityRecord};
