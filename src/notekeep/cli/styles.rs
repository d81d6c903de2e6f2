use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub index: Style,
    pub title: Style,
    pub meta: Style,
    pub age: Style,
    pub rule: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
}

pub static NOTEKEEP_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    index: Style::new().yellow(),
    title: Style::new().bold(),
    meta: Style::new().cyan(),
    age: Style::new().color256(247).italic(),
    rule: Style::new().dim(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
});
