//! Session layer: owns the single live selection state, the current step and
//! the back-navigation history. All mutation funnels through `apply`.

use crate::catalog::Catalog;
use crate::domain::selection::SelectionState;
use crate::errors::ResolverError;
use crate::resolver::flow::{apply_choice, step_options, Choice, StepId, StepOption};
use crate::resolver::pricing::{compose_summary, QuoteSummary};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    state: SelectionState,
    step: StepId,
    history: Vec<StepId>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { state: SelectionState::default(), step: StepId::ProductType, history: Vec::new() }
    }

    pub fn step(&self) -> StepId {
        self.step
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn history(&self) -> &[StepId] {
        &self.history
    }

    pub fn options(&self, catalog: &Catalog) -> Vec<StepOption> {
        step_options(catalog, self.step, &self.state)
    }

    /// No option remains under the confirmed constraints: the user must step
    /// back. The terminal step legitimately has no options and is excluded.
    pub fn is_dead_end(&self, catalog: &Catalog) -> bool {
        self.step != StepId::Summary && self.options(catalog).is_empty()
    }

    pub fn apply(&mut self, catalog: &Catalog, choice: &Choice) -> Result<StepId, ResolverError> {
        let outcome = apply_choice(catalog, self.step, &self.state, choice)?;
        if outcome.to != outcome.from {
            self.history.push(outcome.from);
        }
        self.state = outcome.state;
        self.step = outcome.to;
        Ok(self.step)
    }

    /// Re-enters the previously visited step. Fields forced by the undone
    /// forward transition are intentionally left in place until a new forward
    /// choice overwrites them.
    pub fn back(&mut self) -> Option<StepId> {
        let previous = self.history.pop()?;
        self.step = previous;
        Some(previous)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn summary(
        &self,
        catalog: &Catalog,
        currency: &str,
    ) -> Result<QuoteSummary, ResolverError> {
        compose_summary(catalog, &self.state, currency)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use super::Session;
    use crate::catalog::{Catalog, SizeTables};
    use crate::domain::extras::Flashing;
    use crate::domain::product::{
        ModelCode, OpeningType, Product, ProductCategory, ProductId, RoofType,
    };
    use crate::domain::selection::{RoofMaterial, RoofPitch, StructuralSpacing};
    use crate::domain::size::{Size, SizeCode};
    use crate::resolver::flow::{Choice, StepId};

    fn catalog() -> Catalog {
        Catalog::builtin().expect("builtin catalog")
    }

    #[test]
    fn apply_then_back_then_reapply_is_stable() {
        let catalog = catalog();
        let mut session = Session::new();
        session
            .apply(&catalog, &Choice::Category(ProductCategory::Skylight))
            .expect("category");
        session.apply(&catalog, &Choice::Pitch(RoofPitch::Pitched)).expect("pitch");

        let before = session.state().clone();
        session.back().expect("history holds the pitch step");
        assert_eq!(session.step(), StepId::Pitch);

        session.apply(&catalog, &Choice::Pitch(RoofPitch::Pitched)).expect("pitch again");
        assert_eq!(session.state(), &before);
        assert_eq!(session.step(), StepId::Material);
    }

    #[test]
    fn back_preserves_fields_forced_by_the_undone_transition() {
        let catalog = catalog();
        let mut session = Session::new();
        session
            .apply(&catalog, &Choice::Category(ProductCategory::SunTunnel))
            .expect("category");
        session.apply(&catalog, &Choice::Pitch(RoofPitch::Flat)).expect("flat tunnel");

        assert_eq!(session.state().selected_product, Some(ProductId::new("tcr")));
        session.back().expect("back to pitch");

        // The forced SKU stays until a new forward choice overwrites it.
        assert_eq!(session.step(), StepId::Pitch);
        assert_eq!(session.state().selected_product, Some(ProductId::new("tcr")));
    }

    #[test]
    fn back_at_the_first_step_is_a_no_op() {
        let mut session = Session::new();
        assert_eq!(session.back(), None);
        assert_eq!(session.step(), StepId::ProductType);
    }

    #[test]
    fn toggles_do_not_grow_the_history() {
        let catalog = catalog();
        let mut session = Session::new();
        for choice in [
            Choice::Category(ProductCategory::Skylight),
            Choice::Pitch(RoofPitch::Flat),
            Choice::Opening(OpeningType::Fixed),
            Choice::Spacing(StructuralSpacing::Mm600),
        ] {
            session.apply(&catalog, &choice).expect("walk to size step");
        }
        assert_eq!(session.step(), StepId::Size);

        let depth = session.history().len();
        session
            .apply(&catalog, &Choice::Orientation(crate::domain::selection::Orientation::Landscape))
            .expect("orientation toggle");
        assert_eq!(session.step(), StepId::Size);
        assert_eq!(session.history().len(), depth);
    }

    #[test]
    fn reset_clears_state_step_and_history() {
        let catalog = catalog();
        let mut session = Session::new();
        session
            .apply(&catalog, &Choice::Category(ProductCategory::Skylight))
            .expect("category");
        session.apply(&catalog, &Choice::Pitch(RoofPitch::Flat)).expect("pitch");

        session.reset();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn empty_size_domain_is_a_dead_end_until_the_user_steps_back() {
        // Reduced catalog: the only pitched skylight carries an M size, so
        // 600mm spacing leaves nothing to offer.
        let code = SizeCode::new("M04");
        let product = Product {
            id: ProductId::new("vs"),
            model: ModelCode::new("VS"),
            name: "Manual Opening Skylight (VS)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Manual,
            compatible_sizes: vec![code.clone()],
            prices: BTreeMap::from([(code.clone(), Decimal::from(1306))]),
        };
        let catalog = Catalog::validated(
            vec![product],
            SizeTables {
                pitched: vec![Size {
                    code,
                    width_mm: 780,
                    height_mm: 980,
                    label: "780 x 980".to_owned(),
                }],
                ..SizeTables::default()
            },
            Flashing {
                id: "edw".to_owned(),
                model: ModelCode::new("EDW"),
                name: "EDW Flashing (Tile/Corrugated)".to_owned(),
                prices: BTreeMap::new(),
            },
            Vec::new(),
            Vec::new(),
        )
        .expect("reduced catalog validates");

        let mut session = Session::new();
        for choice in [
            Choice::Category(ProductCategory::Skylight),
            Choice::Pitch(RoofPitch::Pitched),
            Choice::Material(RoofMaterial::TiledCorrugated),
            Choice::Opening(OpeningType::Manual),
            Choice::Spacing(StructuralSpacing::Mm600),
        ] {
            session.apply(&catalog, &choice).expect("walk to size step");
        }

        assert_eq!(session.step(), StepId::Size);
        assert!(session.is_dead_end(&catalog));

        session.back().expect("back out of the dead end");
        assert_eq!(session.step(), StepId::Truss);
        assert!(!session.is_dead_end(&catalog));
    }

    #[test]
    fn full_walkthrough_produces_a_summary() {
        let catalog = catalog();
        let mut session = Session::new();
        for choice in [
            Choice::Category(ProductCategory::Skylight),
            Choice::Pitch(RoofPitch::Pitched),
            Choice::Material(RoofMaterial::TiledCorrugated),
            Choice::Opening(OpeningType::Manual),
            Choice::Spacing(StructuralSpacing::Mm600),
            Choice::Size(SizeCode::new("C04")),
            Choice::Product(ProductId::new("vs")),
            Choice::Blind(None),
        ] {
            session.apply(&catalog, &choice).expect("walkthrough");
        }

        assert_eq!(session.step(), StepId::Summary);
        let summary = session.summary(&catalog, "AUD").expect("summary");
        assert_eq!(summary.line_items.len(), 2);
    }

    #[test]
    fn summary_is_never_a_dead_end() {
        let catalog = catalog();
        let mut session = Session::new();
        for choice in [
            Choice::Category(ProductCategory::SunTunnel),
            Choice::Pitch(RoofPitch::Flat),
            Choice::Product(ProductId::new("tcr")),
            Choice::Addon(None),
            Choice::Continue,
        ] {
            session.apply(&catalog, &choice).expect("tunnel walkthrough");
        }
        assert_eq!(session.step(), StepId::Summary);
        assert!(!session.is_dead_end(&catalog));
        assert!(session.options(&catalog).is_empty());
    }
}
