//! Canonical labels produced by the classifier (pt-BR).

pub const BAR_CHART: &str = "Gráfico de barras";
pub const PIE_CHART: &str = "Gráfico de pizza";
pub const FLOW_DIAGRAM: &str = "Diagrama de fluxo";
pub const CHART: &str = "Gráfico";
pub const ILLUSTRATION: &str = "Ilustração";
pub const ICON: &str = "Ícone";
pub const LOGO: &str = "Logo";
pub const LOGOTYPE: &str = "Logotipo";

pub const SEARCH: &str = "Pesquisar";
pub const OPEN_MENU: &str = "Abrir menu de navegação";
pub const CLOSE: &str = "Fechar";
pub const NOTIFICATIONS: &str = "Ver notificações";
pub const FAVORITE: &str = "Adicionar aos favoritos";

/// Emitted when nothing usable can be derived; a person has to write the text.
pub const NEEDS_REVIEW: &str = "Imagem sem descrição: revisar manualmente";
