use crate::core::models::Notice;

pub trait HostSurface: Send + Sync {
    fn show_notice(&self, notice: Notice);
    fn open_settings_tab(&self, tab_id: &str);
}
