// Defaults and constants for the shipped configuration

use crate::keys::Modifier;

/// Primary modifier for every binding.
pub(crate) const MOD: Modifier = Modifier::Mod1;

// External programs
pub(crate) const TERMINAL: &str = "x-terminal-emulator";
pub(crate) const BROWSER: &str = "x-www-browser";
pub(crate) const FILE_MANAGER: &str = "thunar";
pub(crate) const LAUNCHER_RUN: &str = "rofi -show run";
pub(crate) const LAUNCHER_DRUN: &str = "rofi -show drun";
pub(crate) const PROCESS_MONITOR: &str = "gtop";
pub(crate) const NETWORK_MENU: &str = "def-nmdmenu";

pub(crate) const GROUP_LABELS: &str = "12345";
pub(crate) const DEFAULT_PALETTE: &str = "material";

// Layout styling
pub(crate) const BORDER_FOCUS: &str = "#0A567F";
pub(crate) const BORDER_NORMAL: &str = "#4c566a";
pub(crate) const BORDER_WIDTH: u16 = 2;
pub(crate) const LAYOUT_MARGIN: u16 = 8;

// Fonts
pub(crate) const BAR_FONT: &str = "Noto Sans";
pub(crate) const BAR_FONT_SIZE: u16 = 12;
pub(crate) const WIDGET_PADDING: u16 = 5;
pub(crate) const GROUPBOX_FONT_SIZE: u16 = 15;
pub(crate) const ICON_FONT: &str = "Iosevka Nerd Font";
pub(crate) const ICON_FONT_SIZE: u16 = 15;

// Bar geometry
pub(crate) const BAR_HEIGHT: u16 = 35;
pub(crate) const BAR_OPACITY: f32 = 0.9;
pub(crate) const BAR_MARGIN: [u16; 4] = [5, 10, 0, 10];

// Separator and spacer styling
pub(crate) const EDGE_SPACER_LENGTH: u16 = 5;
pub(crate) const SEP_SIZE_PERCENT: u8 = 60;
pub(crate) const SEP_MARGIN: u16 = 5;
pub(crate) const SEP_LINEWIDTH: u16 = 2;

// Launcher icon asset, resolved against $HOME by the host
pub(crate) const LAUNCHER_ICON: &str = "~/.config/plank/launcher.png";
pub(crate) const IMAGE_MARGIN: u16 = 3;

// Gauge formats and refresh
pub(crate) const GAUGE_INTERVAL_SECS: u64 = 2;
pub(crate) const CPU_FORMAT: &str = "{load_percent}%";
pub(crate) const MEMORY_FORMAT: &str = "{mem_used}{unit}";
pub(crate) const NET_FORMAT: &str = "{down} \u{2193}\u{2191} {up}";
pub(crate) const BATTERY_FORMAT: &str = "{percent}%";
pub(crate) const VOLUME_FORMAT: &str = "{volume}%";
pub(crate) const DATE_FORMAT: &str = "%b %d-%Y";
pub(crate) const TIME_FORMAT: &str = "%I:%M %p";

// Nerd font glyphs for the bar icons
pub(crate) const GLYPH_LAYOUT: &str = "\u{f879}";
pub(crate) const GLYPH_CPU: &str = "\u{fb19}";
pub(crate) const GLYPH_MEMORY: &str = "\u{f85a}";
pub(crate) const GLYPH_NET: &str = "\u{f1eb}";
pub(crate) const GLYPH_BATTERY: &str = "\u{f1e6}";
pub(crate) const GLYPH_VOLUME: &str = "\u{fa7d}";
pub(crate) const GLYPH_DATE: &str = "\u{f073}";
pub(crate) const GLYPH_TIME: &str = "\u{f017}";
