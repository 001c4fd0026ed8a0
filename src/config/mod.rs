//! Console configuration loading and management
//!
//! Each list view of the console (issues, flagged issues, inventory,
//! officers, inventory requests) is described declaratively: which fields
//! the search box covers, which dropdown filters exist, the default sort and
//! the page size.

use crate::core::error::ConfigError;
use crate::core::query::DEFAULT_PAGE_SIZE;
use crate::core::record::Record;
use crate::core::sort::{SortDirection, SortSpec};
use crate::core::view_model::ViewModel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Pagination defaults shared by every view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Page sizes offered in the page-size selector
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_sizes() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_sizes: default_page_sizes(),
        }
    }
}

/// One entry of a filter dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: Value,
    pub label: String,
}

/// A dropdown filter over one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// Field name or dotted path
    pub field: String,

    /// Label of the sentinel entry (e.g. "All Statuses")
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub options: Vec<FilterOption>,
}

/// Configuration of one list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name (e.g., "issues", "inventory")
    pub name: String,

    /// Rows per page; falls back to the pagination default
    #[serde(default)]
    pub page_size: Option<usize>,

    #[serde(default)]
    pub search_fields: Vec<String>,

    #[serde(default)]
    pub filters: Vec<FilterField>,

    #[serde(default)]
    pub default_sort: Option<SortSpec>,

    /// Fields offered in the sort selector
    #[serde(default)]
    pub sort_options: Vec<String>,
}

impl ViewConfig {
    pub fn filter_fields(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|f| f.field.as_str())
    }

    pub fn filter(&self, field: &str) -> Option<&FilterField> {
        self.filters.iter().find(|f| f.field == field)
    }

    /// Build a view model over `records` configured for this view
    ///
    /// A view without its own `page_size` gets [`DEFAULT_PAGE_SIZE`] rows.
    /// [`ConsoleConfig::view_model`] applies the console's pagination default
    /// instead.
    pub fn view_model(&self, records: Vec<Record>) -> ViewModel {
        self.view_model_with_page_size(records, DEFAULT_PAGE_SIZE)
    }

    /// Build a view model, using `default_page_size` when the view has none
    pub fn view_model_with_page_size(&self, records: Vec<Record>, default_page_size: usize) -> ViewModel {
        let page_size = self.page_size.unwrap_or(default_page_size);
        let model = ViewModel::new(records)
            .with_search_fields(self.search_fields.iter().cloned())
            .with_filter_fields(self.filter_fields().map(str::to_string).collect::<Vec<_>>())
            .with_page_size(page_size);

        match &self.default_sort {
            Some(sort) => model.with_sort(sort.clone()),
            None => model,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == Some(0) {
            return Err(self.invalid("page_size must be at least 1"));
        }
        let mut seen = HashSet::new();
        for filter in &self.filters {
            if !seen.insert(filter.field.as_str()) {
                return Err(self.invalid(format!("filter '{}' is declared twice", filter.field)));
            }
        }
        Ok(())
    }

    fn invalid(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::InvalidView {
            view: self.name.clone(),
            message: message.into(),
        }
    }
}

/// Complete configuration of the console's list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Absent when the file has no `pagination:` block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationConfig>,

    #[serde(default)]
    pub views: Vec<ViewConfig>,
}

impl ConsoleConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check page sizes, duplicate views and duplicate filters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination().default_page_size == 0 {
            return Err(ConfigError::InvalidView {
                view: "pagination".to_string(),
                message: "default_page_size must be at least 1".to_string(),
            });
        }
        let mut names = HashSet::new();
        for view in &self.views {
            if !names.insert(view.name.as_str()) {
                return Err(view.invalid("view is declared twice"));
            }
            view.validate()?;
        }
        Ok(())
    }

    /// Pagination defaults, falling back to the built-in ones
    pub fn pagination(&self) -> PaginationConfig {
        self.pagination.clone().unwrap_or_default()
    }

    /// Find a view by name
    pub fn view(&self, name: &str) -> Result<&ViewConfig, ConfigError> {
        self.views
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| ConfigError::UnknownView {
                name: name.to_string(),
            })
    }

    /// Build a configured view model for the named view
    pub fn view_model(&self, name: &str, records: Vec<Record>) -> Result<ViewModel, ConfigError> {
        Ok(self
            .view(name)?
            .view_model_with_page_size(records, self.pagination().default_page_size))
    }

    /// Merge several configurations
    ///
    /// Views are matched by name: a later definition replaces an earlier one
    /// in place, new names are appended. The last pagination block present wins.
    pub fn merge(configs: Vec<ConsoleConfig>) -> Self {
        let mut merged = ConsoleConfig {
            pagination: None,
            views: Vec::new(),
        };

        for config in configs {
            if config.pagination.is_some() {
                merged.pagination = config.pagination;
            }
            for view in config.views {
                match merged.views.iter_mut().find(|v| v.name == view.name) {
                    Some(existing) => *existing = view,
                    None => merged.views.push(view),
                }
            }
        }

        merged
    }

    /// The views of the stock admin console
    pub fn default_config() -> Self {
        let categories = options(&[
            ("Roads", "Roads"),
            ("Sanitation", "Sanitation"),
            ("Streetlight", "Streetlight"),
            ("Water Leakage", "Water Leakage"),
            ("Parks", "Parks"),
        ]);

        Self {
            pagination: Some(PaginationConfig::default()),
            views: vec![
                ViewConfig {
                    name: "issues".to_string(),
                    page_size: None,
                    search_fields: strings(&["title", "description", "category"]),
                    filters: vec![
                        FilterField {
                            field: "status".to_string(),
                            label: Some("All Statuses".to_string()),
                            options: options(&[
                                ("submitted", "Submitted"),
                                ("verified", "Verified"),
                                ("rejected", "Rejected"),
                                ("acknowledged", "Acknowledged"),
                                ("in_progress", "In Progress"),
                                ("resolved", "Resolved"),
                                ("closed", "Closed"),
                            ]),
                        },
                        FilterField {
                            field: "category".to_string(),
                            label: Some("All Categories".to_string()),
                            options: categories.clone(),
                        },
                        FilterField {
                            field: "priority".to_string(),
                            label: Some("All Priorities".to_string()),
                            options: options(&[
                                ("1", "Critical (1)"),
                                ("2", "High (2)"),
                                ("3", "Medium (3)"),
                                ("4", "Low (4)"),
                                ("5", "Very Low (5)"),
                            ]),
                        },
                    ],
                    default_sort: Some(SortSpec::new("createdAt", SortDirection::Descending)),
                    sort_options: strings(&["createdAt", "title", "category", "status", "priority"]),
                },
                ViewConfig {
                    name: "flagged_issues".to_string(),
                    page_size: None,
                    search_fields: strings(&["title", "description"]),
                    filters: vec![FilterField {
                        field: "category".to_string(),
                        label: Some("All Categories".to_string()),
                        options: categories,
                    }],
                    default_sort: Some(SortSpec::new("createdAt", SortDirection::Descending)),
                    sort_options: strings(&[
                        "createdAt",
                        "title",
                        "category",
                        "priority",
                        "verification.confidenceScore",
                    ]),
                },
                ViewConfig {
                    name: "inventory".to_string(),
                    page_size: None,
                    search_fields: strings(&["name", "description", "category"]),
                    filters: vec![
                        FilterField {
                            field: "category".to_string(),
                            label: Some("All Categories".to_string()),
                            options: options(&[
                                ("Electrical", "Electrical"),
                                ("Construction", "Construction"),
                                ("Sanitation", "Sanitation"),
                            ]),
                        },
                        FilterField {
                            field: "stockStatus".to_string(),
                            label: Some("All Status".to_string()),
                            options: options(&[
                                ("in stock", "In Stock"),
                                ("low stock", "Low Stock"),
                                ("out of stock", "Out of Stock"),
                            ]),
                        },
                    ],
                    default_sort: Some(SortSpec::new("name", SortDirection::Ascending)),
                    sort_options: strings(&["name", "category", "availableCount", "unitCost", "totalValue"]),
                },
                ViewConfig {
                    name: "officers".to_string(),
                    page_size: None,
                    search_fields: strings(&["fullName", "email", "officerProfile.officerCode"]),
                    filters: vec![
                        FilterField {
                            field: "officerProfile.department".to_string(),
                            label: Some("All Departments".to_string()),
                            options: options(&[
                                ("Public Works", "Public Works"),
                                ("Sanitation", "Sanitation"),
                                ("Horticulture", "Horticulture"),
                                ("Electrical", "Electrical"),
                            ]),
                        },
                        FilterField {
                            field: "officerProfile.status".to_string(),
                            label: Some("All Status".to_string()),
                            options: options(&[
                                ("active", "Active"),
                                ("inactive", "Inactive"),
                                ("on_leave", "On Leave"),
                            ]),
                        },
                    ],
                    default_sort: Some(SortSpec::new("fullName", SortDirection::Ascending)),
                    sort_options: strings(&["fullName", "efficiency", "assigned", "resolved"]),
                },
                ViewConfig {
                    name: "inventory_requests".to_string(),
                    page_size: None,
                    search_fields: strings(&["issueId", "officerId"]),
                    filters: vec![FilterField {
                        field: "status".to_string(),
                        label: Some("All Requests".to_string()),
                        options: options(&[
                            ("requested", "Requested"),
                            ("approved", "Approved"),
                            ("rejected", "Rejected"),
                            ("billed", "Billed"),
                        ]),
                    }],
                    default_sort: Some(SortSpec::new("requestedAt", SortDirection::Descending)),
                    sort_options: strings(&["requestedAt", "status"]),
                },
            ],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn options(items: &[(&str, &str)]) -> Vec<FilterOption> {
    items
        .iter()
        .map(|(value, label)| FilterOption {
            value: Value::String(value.to_string()),
            label: label.to_string(),
        })
        .collect()
}
