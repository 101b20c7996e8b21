use memscan_api::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
use memscan_api::structures::memory::memory_alignment::MemoryAlignment;
use memscan_api::structures::scanning::memory_read_mode::MemoryReadMode;
use memscan_api::structures::settings::scan_settings::ScanSettings;
use memscan_api::structures::settings::scan_thread_priority::ScanThreadPriority;
use serde_json::to_string_pretty;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

/// Process-wide, JSON-backed store of scan tunables: buffer size, thread priority, the
/// debug-only pause-while-scanning knob, single-threaded override, progress cadence, floating
/// point comparison tolerance, and default memory alignment.
pub struct ScanSettingsConfig {
    config: Arc<RwLock<ScanSettings>>,
    config_file: PathBuf,
}

impl ScanSettingsConfig {
    fn new() -> Self {
        let config_file = Self::default_config_path();
        let config = if config_file.exists() {
            match fs::read_to_string(&config_file) {
                Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
                Err(_) => ScanSettings::default(),
            }
        } else {
            ScanSettings::default()
        };

        Self {
            config: Arc::new(RwLock::new(config)),
            config_file,
        }
    }

    fn get_instance() -> &'static ScanSettingsConfig {
        static INSTANCE: OnceLock<ScanSettingsConfig> = OnceLock::new();
        INSTANCE.get_or_init(ScanSettingsConfig::new)
    }

    fn default_config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or(Path::new(""))
            .join("scan_settings.json")
    }

    fn save_config() {
        if let Ok(config) = Self::get_instance().config.read() {
            if let Ok(json) = to_string_pretty(&*config) {
                let _ = fs::write(&Self::get_instance().config_file, json);
            }
        }
    }

    pub fn get_full_config() -> &'static Arc<RwLock<ScanSettings>> {
        &Self::get_instance().config
    }

    pub fn get_scan_buffer_kb() -> u32 {
        Self::get_instance().config.read().map(|config| config.scan_buffer_kb).unwrap_or(ScanSettings::default().scan_buffer_kb)
    }

    pub fn set_scan_buffer_kb(value: u32) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.scan_buffer_kb = value.max(64);
        }
        Self::save_config();
    }

    pub fn get_thread_priority() -> ScanThreadPriority {
        Self::get_instance()
            .config
            .read()
            .map(|config| config.thread_priority)
            .unwrap_or(ScanThreadPriority::Normal)
    }

    pub fn set_thread_priority(value: ScanThreadPriority) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.thread_priority = value;
        }
        Self::save_config();
    }

    pub fn get_pause_while_scanning() -> bool {
        Self::get_instance().config.read().map(|config| config.pause_while_scanning).unwrap_or(false)
    }

    pub fn set_pause_while_scanning(value: bool) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.pause_while_scanning = value;
        }
        Self::save_config();
    }

    pub fn get_memory_alignment() -> Option<MemoryAlignment> {
        Self::get_instance().config.read().map(|config| config.memory_alignment).unwrap_or(None)
    }

    pub fn set_memory_alignment(value: Option<MemoryAlignment>) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.memory_alignment = value;
        }
        Self::save_config();
    }

    pub fn get_memory_read_mode() -> MemoryReadMode {
        Self::get_instance()
            .config
            .read()
            .map(|config| config.memory_read_mode)
            .unwrap_or_default()
    }

    pub fn set_memory_read_mode(value: MemoryReadMode) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.memory_read_mode = value;
        }
        Self::save_config();
    }

    pub fn get_floating_point_tolerance() -> FloatingPointTolerance {
        Self::get_instance()
            .config
            .read()
            .map(|config| config.floating_point_tolerance)
            .unwrap_or_default()
    }

    pub fn set_floating_point_tolerance(value: FloatingPointTolerance) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.floating_point_tolerance = value;
        }
        Self::save_config();
    }

    pub fn get_is_single_threaded_scan() -> bool {
        Self::get_instance().config.read().map(|config| config.is_single_threaded_scan).unwrap_or(false)
    }

    pub fn set_is_single_threaded_scan(value: bool) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.is_single_threaded_scan = value;
        }
        Self::save_config();
    }

    pub fn get_progress_report_every_n_regions() -> u64 {
        Self::get_instance()
            .config
            .read()
            .map(|config| config.progress_report_every_n_regions.max(1))
            .unwrap_or(32)
    }

    pub fn set_progress_report_every_n_regions(value: u64) {
        if let Ok(mut config) = Self::get_instance().config.write() {
            config.progress_report_every_n_regions = value.max(1);
        }
        Self::save_config();
    }
}
