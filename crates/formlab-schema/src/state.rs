//! Client-side state of the edit-user form.

use formlab_forms::{
    ArrayField, ErrorKind, FieldPath, Form, FormFieldDef, Keyed, ValidationErrors,
};
use tracing::debug;

use crate::catalog::Game;
use crate::edit_user::{
    region_fields, Address, ContactPreference, EditUserRequest, FavoriteGameEntry, UserBase,
};
use crate::region::RegionBlock;
use crate::types::Region;

/// Locale the form starts with.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Region the form starts with.
pub const DEFAULT_REGION: Region = Region::Eu;

/// Editable state of the edit-user form.
///
/// Only the active region's block is held. Switching region throws the old
/// block away, so switching back starts from that region's initial values.
#[derive(Debug, Clone)]
pub struct EditUserFormState {
    pub email: String,
    pub display_name: String,
    pub locale: String,
    pub contact: ContactPreference,
    pub address: Option<Address>,
    pub favorite_games: ArrayField<FavoriteGameEntry>,
    block: RegionBlock,
}

impl Default for EditUserFormState {
    fn default() -> Self {
        Self {
            email: String::new(),
            display_name: String::new(),
            locale: DEFAULT_LOCALE.to_string(),
            contact: ContactPreference::default(),
            address: None,
            favorite_games: ArrayField::new(),
            block: RegionBlock::initial(DEFAULT_REGION),
        }
    }
}

impl EditUserFormState {
    /// Creates the initial form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form state pre-filled from an existing submission.
    pub fn from_request(request: EditUserRequest) -> Self {
        let EditUserRequest { base, block } = request;
        Self {
            email: base.email,
            display_name: base.display_name,
            locale: base.locale,
            contact: base.contact,
            address: base.address,
            favorite_games: ArrayField::from_values(base.favorite_games),
            block,
        }
    }

    /// Returns the active region.
    pub fn region(&self) -> Region {
        self.block.region()
    }

    /// Returns the active region block.
    pub fn block(&self) -> &RegionBlock {
        &self.block
    }

    /// Returns the active region block for editing.
    pub fn block_mut(&mut self) -> &mut RegionBlock {
        &mut self.block
    }

    /// Selects a region.
    ///
    /// Selecting a different region replaces the active block with the new
    /// region's initial block; selecting the active region keeps its values.
    /// Base fields are never touched. Returns the previously active region.
    pub fn switch_region(&mut self, region: Region) -> Region {
        let previous = self.region();
        if previous != region {
            debug!(from = %previous, to = %region, "switching region");
            self.block = RegionBlock::initial(region);
        }
        previous
    }

    /// Returns the field definitions of the active region.
    pub fn active_fields(&self) -> &'static [FormFieldDef] {
        region_fields(self.region())
    }

    /// Appends an empty favorite-game entry and returns the updated list.
    pub fn append_favorite(&mut self) -> &[Keyed<FavoriteGameEntry>] {
        self.favorite_games.append()
    }

    /// Appends an entry for a catalog game and returns its UI key.
    pub fn add_favorite(&mut self, game: &Game) -> String {
        self.favorite_games.push(FavoriteGameEntry::new(game.id))
    }

    /// Removes the favorite-game entry at `index`.
    pub fn remove_favorite(&mut self, index: usize) -> formlab_forms::Result<()> {
        self.favorite_games.remove(index).map(|_| ())
    }

    /// Builds the submission for the current state, without validating it.
    pub fn to_request(&self) -> EditUserRequest {
        EditUserRequest {
            base: UserBase {
                email: self.email.clone(),
                display_name: self.display_name.clone(),
                locale: self.locale.clone(),
                contact: self.contact.clone(),
                favorite_games: self.favorite_games.values(),
                address: self.address.clone(),
            },
            block: self.block.clone(),
        }
    }

    /// Validates the current state as a submission.
    pub fn submit(&self) -> Result<EditUserRequest, ValidationErrors> {
        let payload = serde_json::to_value(self.to_request()).map_err(|e| {
            ValidationErrors::single(FieldPath::root(), ErrorKind::SchemaMismatch, e.to_string())
        })?;
        EditUserRequest::parse(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_game;
    use crate::region::{UkFields, UsFields};
    use crate::types::UsState;

    #[test]
    fn test_initial_state() {
        let state = EditUserFormState::new();
        assert_eq!(state.region(), Region::Eu);
        assert_eq!(state.locale, "en-US");
        assert!(state.favorite_games.is_empty());
        assert_eq!(state.block(), &RegionBlock::initial(Region::Eu));
    }

    #[test]
    fn test_switch_discards_previous_block() {
        let mut state = EditUserFormState::new();
        state.switch_region(Region::Uk);
        *state.block_mut() = RegionBlock::Uk {
            uk: UkFields {
                county: None,
                postcode: "SW1A 1AA".into(),
                nin_last4: None,
            },
        };

        assert_eq!(state.switch_region(Region::Us), Region::Uk);
        state.switch_region(Region::Uk);
        assert_eq!(state.block(), &RegionBlock::initial(Region::Uk));
    }

    #[test]
    fn test_switch_to_same_region_keeps_values() {
        let mut state = EditUserFormState::new();
        state.switch_region(Region::Us);
        let filled = RegionBlock::Us {
            us: UsFields {
                state: UsState::Tx,
                zip_plus4: None,
                ssn_last4: None,
                tax_residency_confirmed: true,
            },
        };
        *state.block_mut() = filled.clone();
        state.switch_region(Region::Us);
        assert_eq!(state.block(), &filled);
    }

    #[test]
    fn test_switch_keeps_base_fields() {
        let mut state = EditUserFormState::new();
        state.email = "user@example.com".into();
        state.display_name = "Test User".into();
        state.add_favorite(find_game("g1").unwrap());

        for region in [Region::Us, Region::Other, Region::Uk, Region::Eu] {
            state.switch_region(region);
            assert_eq!(state.email, "user@example.com");
            assert_eq!(state.display_name, "Test User");
            assert_eq!(state.favorite_games.len(), 1);
        }
    }

    #[test]
    fn test_active_fields_follow_region() {
        let mut state = EditUserFormState::new();
        assert!(state.active_fields().iter().any(|f| f.label == "GDPR Consent"));
        state.switch_region(Region::Us);
        assert!(state.active_fields().iter().any(|f| f.label == "State"));
        assert!(!state.active_fields().iter().any(|f| f.label == "GDPR Consent"));
    }

    #[test]
    fn test_from_request_round_trip() {
        let mut state = EditUserFormState::new();
        state.email = "user@example.com".into();
        state.display_name = "Test User".into();
        state.switch_region(Region::Other);
        state.add_favorite(find_game("g2").unwrap());

        let request = state.submit().unwrap();
        let restored = EditUserFormState::from_request(request.clone());
        assert_eq!(restored.to_request(), request);
    }

    #[test]
    fn test_remove_favorite_out_of_range() {
        let mut state = EditUserFormState::new();
        state.append_favorite();
        let err = state.remove_favorite(3).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IndexOutOfRange));
        assert_eq!(state.favorite_games.len(), 1);
    }
}
