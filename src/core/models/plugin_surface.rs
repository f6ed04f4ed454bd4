/// A command the host exposes in its command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub id: &'static str,
    pub name: &'static str,
}

/// One text field of the settings panel, as rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsField {
    pub name: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    pub tab_id: &'static str,
    pub fields: Vec<SettingsField>,
}
