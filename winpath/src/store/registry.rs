//! Windows registry backed environment store.

use std::io;

use winreg::enums::{
    RegType, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WRITE,
};
use winreg::{RegKey, RegValue};

use super::{EnvironmentStore, Scope};
use crate::error::{Error, Result};

const SYSTEM_ENVIRONMENT: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";
const USER_ENVIRONMENT: &str = "Environment";

/// An [`EnvironmentStore`] reading the real System and User environment.
///
/// Values are written back as `REG_EXPAND_SZ` so `%VAR%` references keep
/// expanding for new processes. Writing the System scope needs an elevated
/// process.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    variable: String,
}

impl RegistryStore {
    /// Create a store for the named environment variable (normally `Path`).
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    fn open(scope: Scope, flags: u32) -> io::Result<RegKey> {
        match scope {
            Scope::System => {
                RegKey::predef(HKEY_LOCAL_MACHINE).open_subkey_with_flags(SYSTEM_ENVIRONMENT, flags)
            }
            Scope::User => {
                RegKey::predef(HKEY_CURRENT_USER).open_subkey_with_flags(USER_ENVIRONMENT, flags)
            }
        }
    }
}

fn expand_sz(value: &str) -> RegValue {
    let bytes = value
        .encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_le_bytes)
        .collect();
    RegValue {
        bytes,
        vtype: RegType::REG_EXPAND_SZ,
    }
}

impl EnvironmentStore for RegistryStore {
    fn read_scope(&self, scope: Scope) -> Result<String> {
        let key = Self::open(scope, KEY_READ).map_err(|e| Error::StoreRead {
            scope,
            reason: e.to_string(),
        })?;

        match key.get_value::<String, _>(&self.variable) {
            Ok(value) => Ok(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(Error::StoreRead {
                scope,
                reason: e.to_string(),
            }),
        }
    }

    fn write_scope(&self, scope: Scope, value: &str) -> Result<()> {
        let write_error = |e: io::Error| Error::StoreWrite {
            scope,
            reason: e.to_string(),
        };

        let key = Self::open(scope, KEY_READ | KEY_WRITE).map_err(write_error)?;
        log::debug!("Writing {scope} {} to registry", self.variable);
        key.set_raw_value(&self.variable, &expand_sz(value))
            .map_err(write_error)
    }
}
