//! User-facing status messages for mutation outcomes

use crate::Error;

/// What a mutation did, for message wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

/// Which entity a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Venue,
    Artist,
    Show,
}

impl Entity {
    fn label(self) -> &'static str {
        match self {
            Entity::Venue => "Venue",
            Entity::Artist => "Artist",
            Entity::Show => "Show",
        }
    }

    fn past_tense(self, action: Action) -> &'static str {
        match (self, action) {
            (_, Action::Create) => "listed",
            (Entity::Artist, Action::Update) => "edited",
            (_, Action::Update) => "updated",
            (_, Action::Delete) => "deleted",
        }
    }
}

/// Success banner, e.g. `Venue The Musical Hop was successfully listed!`
pub fn success(entity: Entity, action: Action, name: Option<&str>) -> String {
    match name {
        Some(name) => format!(
            "{} {} was successfully {}!",
            entity.label(),
            name,
            entity.past_tense(action)
        ),
        None => format!(
            "{} was successfully {}!",
            entity.label(),
            entity.past_tense(action)
        ),
    }
}

/// Failure banner; a missing target gets its own wording
pub fn failure(entity: Entity, action: Action, name: Option<&str>, err: &Error) -> String {
    if let (Action::Update | Action::Delete, Error::NotFound(_)) = (action, err) {
        return format!("{} does not exist!", entity.label());
    }

    let verb = entity.past_tense(action);
    match name {
        Some(name) => format!(
            "An error occurred. {} {} could not be {}.",
            entity.label(),
            name,
            verb
        ),
        None => format!(
            "An error occurred. {} could not be {}.",
            entity.label(),
            verb
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_messages() {
        assert_eq!(
            success(Entity::Venue, Action::Create, Some("The Musical Hop")),
            "Venue The Musical Hop was successfully listed!"
        );
        assert_eq!(
            success(Entity::Venue, Action::Update, Some("The Musical Hop")),
            "Venue The Musical Hop was successfully updated!"
        );
        assert_eq!(
            success(Entity::Artist, Action::Update, Some("Guns N Petals")),
            "Artist Guns N Petals was successfully edited!"
        );
        assert_eq!(
            success(Entity::Venue, Action::Delete, None),
            "Venue was successfully deleted!"
        );
        assert_eq!(
            success(Entity::Show, Action::Create, None),
            "Show was successfully listed!"
        );
    }

    #[test]
    fn test_failure_messages() {
        let fault = Error::Validation("name is required".to_string());
        assert_eq!(
            failure(Entity::Venue, Action::Create, Some("Hop"), &fault),
            "An error occurred. Venue Hop could not be listed."
        );
        assert_eq!(
            failure(Entity::Show, Action::Create, None, &fault),
            "An error occurred. Show could not be listed."
        );
        assert_eq!(
            failure(Entity::Artist, Action::Update, Some("X"), &fault),
            "An error occurred. Artist X could not be edited."
        );
    }

    #[test]
    fn test_failure_not_found_wording() {
        let missing = Error::NotFound("venue 99".to_string());
        assert_eq!(
            failure(Entity::Venue, Action::Delete, None, &missing),
            "Venue does not exist!"
        );
        // Creation never reports "does not exist"
        assert_eq!(
            failure(Entity::Show, Action::Create, None, &missing),
            "An error occurred. Show could not be listed."
        );
    }
}
