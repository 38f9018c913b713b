/// Purchase, installation and maintenance cost of one equipment item.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EquipmentCost {
    pub purchase: f64,
    pub installation: f64,
    pub maintenance: f64,
}

impl EquipmentCost {
    pub fn total(&self) -> f64 {
        self.purchase + self.installation + self.maintenance
    }
}

pub fn plan_total(items: impl IntoIterator<Item = EquipmentCost>) -> f64 {
    items.into_iter().map(|cost| cost.total()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_every_cost_component() {
        let items = [
            EquipmentCost {
                purchase: 5000.0,
                installation: 250.0,
                maintenance: 100.0,
            },
            EquipmentCost {
                purchase: 1200.0,
                ..Default::default()
            },
        ];
        assert_eq!(plan_total(items), 6550.0);
        assert_eq!(plan_total([]), 0.0);
    }
}
