use bevy_ecs::prelude::Component;

/// Stable string identifier of a game object, unique among live objects.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
