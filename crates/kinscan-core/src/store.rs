use crate::criteria::Criteria;
use crate::types::{Element, Individual, PersonId, StoreError};

/// Read-only view over a parsed family tree.
///
/// The analysis crates consume stores through this trait only. Implementations
/// must not change while an analysis holds a reference.
pub trait RecordStore {
    /// All records in file order.
    fn element_list(&self) -> &[Element];

    /// Look up an individual by identity.
    fn get_individual(&self, id: &PersonId) -> Option<Individual>;

    /// Direct parents of `individual`, in record order.
    ///
    /// Fails with [`StoreError::NotFound`] if `individual` is not held by this store.
    fn get_parents(&self, individual: &Individual) -> Result<Vec<Individual>, StoreError>;

    /// Parse a criteria expression. Stores may override to extend the grammar.
    fn parse_criteria(&self, text: &str) -> Result<Criteria, StoreError> {
        text.parse()
    }

    /// Iterate individuals in file order, skipping families.
    fn individuals(&self) -> Box<dyn Iterator<Item = &Individual> + '_> {
        Box::new(self.element_list().iter().filter_map(Element::as_individual))
    }
}
