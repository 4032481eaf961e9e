/// Whether adapter preconditions are checked before touching an array.
///
/// In `Checked` mode a violated precondition panics with a description of
/// the violation. In `Unchecked` mode operations are forwarded as-is; the
/// outcome of a violation is unspecified but never memory-unsafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractMode {
    Checked,
    Unchecked,
}

impl ContractMode {
    pub fn is_checked(self) -> bool {
        self == ContractMode::Checked
    }
}

impl Default for ContractMode {
    fn default() -> Self {
        if cfg!(any(debug_assertions, feature = "checked-contracts")) {
            ContractMode::Checked
        } else {
            ContractMode::Unchecked
        }
    }
}

/// Options for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Contract mode handed to adapters bound to the engine.
    pub contracts: ContractMode,

    /// Log arrays still alive at shutdown.
    pub report_leaks: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            contracts: ContractMode::default(),
            report_leaks: true,
        }
    }
}
