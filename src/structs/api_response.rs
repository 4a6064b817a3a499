use serde::{Deserialize, Serialize};
use crate::structs::dependency::Dependency;
use crate::structs::sonarqube::sonar_measure::SonarMeasure;
use crate::structs::tech_debt_item::TechDebtItem;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TechDebtResponse {
    pub success: bool,
    pub count: usize,
    pub items: Vec<TechDebtItem>,
}

impl TechDebtResponse {
    pub fn new(items: Vec<TechDebtItem>) -> Self {
        Self {
            success: true,
            count: items.len(),
            items,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DependencyResponse {
    pub success: bool,
    pub count: usize,
    pub dependencies: Vec<Dependency>,
}

impl DependencyResponse {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self {
            success: true,
            count: dependencies.len(),
            dependencies,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponse {
    pub success: bool,
    pub connected: bool,
    pub project_key: String,
    pub organization: Option<String>,
    pub project_name: Option<String>,
    pub metrics: Vec<SonarMeasure>,
}
