//! Ordered keyword table mapping UI-action words to canonical labels.
//!
//! Patterns run against text produced by `normalize_signal`: lower-case
//! words separated by single spaces. Rows are tried in order and the first
//! match wins, so more specific rows (`unlock`, `eye off`) sit above the
//! general ones they would otherwise lose to (`lock`, `eye`).

use std::sync::LazyLock;

use regex::Regex;

use crate::labels;

const ACTION_ROWS: &[(&str, &str)] = &[
    (r"\bheart|\bfavou?rit|\blike\b", labels::FAVORITE),
    (r"\bsearch|\bmagnif|\blupa\b|\bbusca", labels::SEARCH),
    (r"\bmenu\b|\bhamburger|\bburger\b|\bbars\b", labels::OPEN_MENU),
    (r"\bclose\b|\bxmark|\btimes\b|\bdismiss|\bfechar\b", labels::CLOSE),
    (r"\btrash|\bdelete|\bremove\b|\blixeira|\bexcluir\b", "Excluir"),
    (r"\bsettings?\b|\bgear|\bcogs?\b|\bconfig", "Abrir configurações"),
    (r"\bbell\b|\bnotif|\balarm\b", labels::NOTIFICATIONS),
    (r"\bhome\b|\bhouse\b|\binicio\b", "Ir para a página inicial"),
    (r"\bcart\b|\bbasket|\bshopping|\bbag\b|\bcarrinho", "Abrir carrinho de compras"),
    (r"\bunlock", "Desbloquear"),
    (r"\block\b|\bpadlock", "Conteúdo bloqueado"),
    (r"\buser\b|\bprofile|\bavatar|\baccount|\bperson\b", "Abrir perfil do usuário"),
    (r"\bedit\b|\bpencil|\beditar\b", "Editar"),
    (r"\bdownload", "Baixar arquivo"),
    (r"\bupload", "Enviar arquivo"),
    (r"\bshare", "Compartilhar"),
    (r"\bmail\b|\bemail|\benvelope|\binbox", "Enviar e-mail"),
    (r"\bphone|\btelefone|\bcall\b", "Ligar"),
    (r"\bplus\b|\badd\b|\bcreate\b|\bnew\b", "Adicionar"),
    (r"\bminus\b|\bsubtract", "Diminuir"),
    (r"\bcheck\b|\bcheckmark|\btick\b|\bconfirm|\bdone\b", "Confirmar"),
    (r"\b(?:arrow|chevron|caret) left\b|\bback\b|\bprev(?:ious)?\b", "Voltar"),
    (r"\b(?:arrow|chevron|caret) right\b|\bnext\b|\bforward\b", "Avançar"),
    (r"\b(?:arrow|chevron|caret) up\b|\bcollapse", "Recolher"),
    (r"\b(?:arrow|chevron|caret) down\b|\bexpand|\bdropdown", "Expandir"),
    (r"\bplay\b", "Reproduzir"),
    (r"\bpause\b", "Pausar"),
    (r"\bstop\b", "Parar"),
    (r"\bvolume|\bsound\b|\bspeaker|\bmute\b", "Ajustar volume"),
    (r"\bcalendar|\bdate\b|\bagenda\b", "Abrir calendário"),
    (r"\bclock\b|\btime\b|\bschedule", "Ver horário"),
    (r"\beye off\b|\beye slash\b|\bhide\b", "Ocultar conteúdo"),
    (r"\beye\b|\bview\b|\bshow\b|\bvisib", "Mostrar conteúdo"),
    (r"\binfo\b|\binformation", "Mais informações"),
    (r"\bhelp\b|\bquestion|\bajuda\b", "Ajuda"),
    (r"\bwarning|\balert|\bexclamation|\battention", "Aviso"),
    (r"\berror\b|\bdanger\b", "Erro"),
    (r"\bstars?\b|\brating", "Avaliar"),
    (r"\bfilter|\bfunnel", "Filtrar"),
    (r"\bsort", "Ordenar"),
    (r"\brefresh|\breload|\bsync\b|\bredo\b|\brotate", "Atualizar"),
    (r"\bprint", "Imprimir"),
    (r"\bcopy\b|\bclipboard|\bduplicate", "Copiar"),
    (r"\bexternal", "Abrir em nova janela"),
    (r"\blink\b|\bchain\b", "Copiar link"),
    (r"\blogout\b|\blog out\b|\bsign out\b|\bexit\b", "Sair"),
    (r"\blogin\b|\blog in\b|\bsign in\b", "Entrar"),
    (r"\bchat\b|\bmessage|\bcomment|\bbubble", "Abrir conversa"),
    (r"\battach|\bpaperclip", "Anexar arquivo"),
    (r"\bcamera|\bphoto\b", "Tirar foto"),
    (r"\bmap\b|\bpin\b|\blocation|\bmarker|\bgps\b", "Ver localização"),
    (r"\bglobe|\blanguage|\bworld\b", "Alterar idioma"),
    (r"\bmic\b|\bmicrophone", "Ativar microfone"),
    (r"\bfullscreen|\bmaximi[sz]e", "Tela cheia"),
    (r"\bsun\b|\bmoon\b|\btheme\b|\bdark mode\b", "Alternar tema"),
    (r"\blogo\b|\bbrand\b", labels::LOGOTYPE),
];

static ACTION_TABLE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ACTION_ROWS
        .iter()
        .map(|(pattern, label)| {
            let regex = Regex::new(pattern).expect("action keyword patterns are valid");
            (regex, *label)
        })
        .collect()
});

/// Label of the first row whose pattern matches `signal`.
pub(crate) fn match_action(signal: &str) -> Option<&'static str> {
    if signal.is_empty() {
        return None;
    }
    ACTION_TABLE
        .iter()
        .find(|(regex, _)| regex.is_match(signal))
        .map(|(_, label)| *label)
}
