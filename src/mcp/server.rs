//! Energy Formatter MCP Server Implementation
//!
//! Implements the MCP server with all energy formatting tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::energy::FormatterConfig;
use crate::tools::energy::{self, FormatOverrides};
use crate::tools::status::StatusTracker;

/// Energy Formatter MCP Service
#[derive(Clone)]
pub struct EnergyService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<FormatterConfig>,
    tool_router: ToolRouter<EnergyService>,
}

impl EnergyService {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                config.formatter.clone(),
                config.locale_source,
            ))),
            config: Arc::new(config.formatter),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatEnergyParams {
    /// Numeric value expressed in `unit`
    pub value: f64,
    /// Unit name or symbol: joule/J, kilojoule/kJ, calorie/cal, kilocalorie/kcal
    pub unit: String,
    /// Locale identifier such as "en_US" (defaults to the server locale)
    pub locale: Option<String>,
    /// short, medium, or long (defaults to the server style)
    pub unit_style: Option<String>,
    /// Render kilocalories as C/Cal/Calories
    pub food_energy: Option<bool>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatJoulesParams {
    /// Energy quantity in joules
    pub joules: f64,
    /// Locale identifier such as "en_US" (defaults to the server locale)
    pub locale: Option<String>,
    /// short, medium, or long (defaults to the server style)
    pub unit_style: Option<String>,
    /// Render kilocalories as C/Cal/Calories
    pub food_energy: Option<bool>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LocalePreferenceParams {
    /// Locale identifier to check (defaults to the server locale)
    pub locale: Option<String>,
}

impl FormatEnergyParams {
    fn overrides(&self) -> FormatOverrides {
        FormatOverrides {
            locale: self.locale.clone(),
            unit_style: self.unit_style.clone(),
            food_energy: self.food_energy,
        }
    }
}

impl FormatJoulesParams {
    fn overrides(&self) -> FormatOverrides {
        FormatOverrides {
            locale: self.locale.clone(),
            unit_style: self.unit_style.clone(),
            food_energy: self.food_energy,
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl EnergyService {
    // --- Status ---

    #[tool(description = "Get the current status of the energy formatter including build info, active locale and style, and process information")]
    async fn energy_fmt_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for choosing energy units, styles, and food-energy mode. Call this when unsure which formatting tool to use.")]
    fn energy_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ENERGY_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ENERGY_INSTRUCTIONS)]))
    }

    // --- Formatting ---

    #[tool(description = "Format a value that is already in a given energy unit, e.g. 5 kJ or 1 kilojoule")]
    fn format_energy(
        &self,
        Parameters(p): Parameters<FormatEnergyParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::format_energy(&self.config, p.value, &p.unit, &p.overrides())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Format a joule quantity in the locale-appropriate unit (calories in the US and UK, joules elsewhere), returning the text and the unit used")]
    fn format_joules(
        &self,
        Parameters(p): Parameters<FormatJoulesParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::format_joules(&self.config, p.joules, &p.overrides())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get only the unit label (symbol or name) for a value in a given unit")]
    fn energy_unit_label(
        &self,
        Parameters(p): Parameters<FormatEnergyParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::energy_unit_label(&self.config, p.value, &p.unit, &p.overrides())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get the unit label and the unit that format_joules would use for a joule quantity")]
    fn energy_unit_label_from_joules(
        &self,
        Parameters(p): Parameters<FormatJoulesParams>,
    ) -> Result<CallToolResult, McpError> {
        let result =
            energy::energy_unit_label_from_joules(&self.config, p.joules, &p.overrides())
                .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Reference ---

    #[tool(description = "List supported energy units with symbols, names, and conversion factors to joules")]
    fn list_energy_units(&self) -> Result<CallToolResult, McpError> {
        to_json(&energy::list_energy_units())
    }

    #[tool(description = "Check whether a locale displays energy in calories or joules")]
    fn locale_energy_preference(
        &self,
        Parameters(p): Parameters<LocalePreferenceParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::locale_energy_preference(&self.config, p.locale.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for EnergyService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: crate::build_info::NAME.into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Energy Formatter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Energy Formatter - localized joule/calorie strings. \
                 Call energy_instructions for details. \
                 Formatting: format_joules (picks the unit), format_energy (explicit unit). \
                 Labels: energy_unit_label, energy_unit_label_from_joules. \
                 Reference: list_energy_units, locale_energy_preference, energy_fmt_status. \
                 All formatting tools accept optional locale, \
                 unit_style (short/medium/long) and food_energy overrides."
                    .into(),
            ),
        }
    }
}
