//! In-memory `RecordStore` backed by a petgraph lineage graph.
//!
//! Records are kept in insertion (file) order. Parent links are directed
//! child -> parent edges; edge insertion order is the order parents are
//! reported in.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::store::RecordStore;
use crate::types::{Element, Family, Individual, PersonId, StoreError};

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    elements: Vec<Element>,
    positions: HashMap<PersonId, usize>,
    nodes: HashMap<PersonId, NodeIndex>,
    family_ids: HashSet<String>,
    lineage: DiGraph<PersonId, ()>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_individual(&mut self, individual: Individual) -> Result<(), StoreError> {
        if self.positions.contains_key(&individual.id) {
            return Err(StoreError::DuplicateId(individual.id.to_string()));
        }
        let node = self.lineage.add_node(individual.id.clone());
        self.nodes.insert(individual.id.clone(), node);
        self.positions.insert(individual.id.clone(), self.elements.len());
        self.elements.push(Element::Individual(individual));
        Ok(())
    }

    /// Add a family and link every listed parent to every listed child.
    ///
    /// References to individuals the store does not hold are skipped with a
    /// warning; the family record itself is kept as-is.
    pub fn add_family(&mut self, family: Family) -> Result<(), StoreError> {
        if !self.family_ids.insert(family.id.clone()) {
            return Err(StoreError::DuplicateId(family.id.clone()));
        }
        for child in &family.children {
            for parent in &family.parents {
                match self.link_parent(child, parent) {
                    Ok(()) => {}
                    Err(StoreError::NotFound(missing)) => {
                        tracing::warn!(
                            family = %family.id,
                            id = %missing,
                            "family references unknown individual"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        self.elements.push(Element::Family(family));
        Ok(())
    }

    /// Record that `parent` is a parent of `child`.
    pub fn link_parent(&mut self, child: &PersonId, parent: &PersonId) -> Result<(), StoreError> {
        let child_idx = *self
            .nodes
            .get(child)
            .ok_or_else(|| StoreError::NotFound(child.clone()))?;
        let parent_idx = *self
            .nodes
            .get(parent)
            .ok_or_else(|| StoreError::NotFound(parent.clone()))?;
        self.lineage.add_edge(child_idx, parent_idx, ());
        Ok(())
    }

    /// True if following parent links can return to the starting individual.
    pub fn has_parent_cycle(&self) -> bool {
        petgraph::algo::is_cyclic_directed(&self.lineage)
    }

    pub fn individual_count(&self) -> usize {
        self.positions.len()
    }

    pub fn family_count(&self) -> usize {
        self.family_ids.len()
    }

    fn individual_at(&self, id: &PersonId) -> Option<&Individual> {
        self.positions
            .get(id)
            .and_then(|&pos| self.elements.get(pos))
            .and_then(Element::as_individual)
    }
}

impl RecordStore for MemoryRecordStore {
    fn element_list(&self) -> &[Element] {
        &self.elements
    }

    fn get_individual(&self, id: &PersonId) -> Option<Individual> {
        self.individual_at(id).cloned()
    }

    fn get_parents(&self, individual: &Individual) -> Result<Vec<Individual>, StoreError> {
        let idx = *self
            .nodes
            .get(&individual.id)
            .ok_or_else(|| StoreError::NotFound(individual.id.clone()))?;

        let mut edges: Vec<_> = self
            .lineage
            .edges_directed(idx, Direction::Outgoing)
            .collect();
        edges.sort_by_key(|e| e.id());

        edges
            .into_iter()
            .map(|e| {
                let parent_id = &self.lineage[e.target()];
                self.individual_at(parent_id)
                    .cloned()
                    .ok_or_else(|| StoreError::NotFound(parent_id.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
