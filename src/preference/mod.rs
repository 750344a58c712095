use std::{
    str::FromStr,
    sync::{Arc, RwLock},
};

use lazy_static::lazy_static;
use log::warn;
use preferences::{AppInfo, Preferences, PreferencesMap};

const PREFS_PATH: &str = "profiler";
pub const APP_INFO: AppInfo = AppInfo {
    name: "descent-profiler",
    author: "shartrec.com",
};

// Preference constants
pub const STAR_DATA_PATH: &str = "StarData.Path";
pub const MAX_DESCENT_GRADIENT_PREF: &str = "Profile.maxDescentGradient";
pub const TOD_IDENT_PREF: &str = "Profile.todIdent";
pub const UNITS: &str = "Units";

lazy_static! {
    static ref MANAGER: PreferenceManager = PreferenceManager {
        preferences: {
            match PreferencesMap::<String>::load(&APP_INFO, PREFS_PATH) {
                Ok(map) => Arc::new(RwLock::new(map)),
                Err(e) => {
                    warn!("Unable to open preferences, using defaults: {}", e);
                    Arc::new(RwLock::new(PreferencesMap::new()))
                }
            }
        },
        path: PREFS_PATH,
        persist: true,
    };
}

pub struct PreferenceManager {
    preferences: Arc<RwLock<PreferencesMap>>,
    path: &'static str,
    persist: bool,
}

impl PreferenceManager {
    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        let prefs = self.preferences.read().ok()?;
        prefs.get(key).and_then(|s| s.parse::<T>().ok())
    }

    pub fn put<T: ToString>(&self, key: &str, value: T) {
        if let Ok(mut prefs) = self.preferences.write() {
            prefs.insert(key.to_string(), value.to_string());
        }
        self.store();
    }

    fn store(&self) {
        if !self.persist {
            return;
        }
        if let Ok(prefs) = self.preferences.read() {
            if let Err(e) = prefs.save(&APP_INFO, self.path) {
                warn!("Unable to save preferences: {}", e);
            }
        }
    }
}

pub fn manager() -> &'static PreferenceManager {
    &MANAGER
}
