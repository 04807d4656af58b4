// Minimal event type for exercising the generic stores without the time entry domain.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DomainEvent {
    pub name: &'static str,
}
