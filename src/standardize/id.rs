use uuid::Uuid;

/// Produces fresh, unique identifiers for items missing a `uid`
pub trait IdGenerator {
    fn new_id(&mut self) -> String;
}

/// Random version-4 UUIDs in hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn new_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F: FnMut() -> String> IdGenerator for F {
    fn new_id(&mut self) -> String {
        self()
    }
}
