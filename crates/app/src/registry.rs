//! Registry — the fixed collection of appliances, indexed by type.

use std::collections::HashMap;

use smarthome_domain::appliance::{Appliance, Controllable};
use smarthome_domain::appliance_type::ApplianceType;
use smarthome_domain::error::SmartHomeError;

/// Owns exactly one appliance per [`ApplianceType`], in insertion order.
#[derive(Debug, Clone)]
pub struct Registry {
    appliances: Vec<Appliance>,
    index: HashMap<ApplianceType, usize>,
}

impl Registry {
    /// Build the registry from the full set of appliances.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::DuplicateAppliance`] when two appliances
    /// share a type.
    pub fn new(appliances: impl IntoIterator<Item = Appliance>) -> Result<Self, SmartHomeError> {
        let appliances: Vec<Appliance> = appliances.into_iter().collect();
        let mut index = HashMap::with_capacity(appliances.len());
        for (position, appliance) in appliances.iter().enumerate() {
            let kind = appliance.appliance_type();
            if index.insert(kind, position).is_some() {
                return Err(SmartHomeError::DuplicateAppliance(kind));
            }
        }
        Ok(Self { appliances, index })
    }

    #[must_use]
    pub fn find_by_type(&self, kind: ApplianceType) -> Option<&Appliance> {
        let position = *self.index.get(&kind)?;
        self.appliances.get(position)
    }

    pub fn find_by_type_mut(&mut self, kind: ApplianceType) -> Option<&mut Appliance> {
        let position = *self.index.get(&kind)?;
        self.appliances.get_mut(position)
    }

    #[must_use]
    pub fn contains(&self, kind: ApplianceType) -> bool {
        self.index.contains_key(&kind)
    }

    /// All appliances in registration order.
    #[must_use]
    pub fn all(&self) -> &[Appliance] {
        &self.appliances
    }

    /// Mutable access to all appliances in registration order.
    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut Appliance> {
        self.appliances.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}
