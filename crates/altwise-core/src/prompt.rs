//! Prompts sent to providers (pt-BR).

/// Markup longer than this is cut before it goes into a prompt.
const MAX_MARKUP_CHARS: usize = 8_000;
/// Sources longer than this (usually data URIs) are cut in text prompts.
const MAX_SRC_CHARS: usize = 200;

const RESPONSE_SCHEMA: &str = r#"Responda somente com JSON neste formato:
{
  "conformidade": {"status": "Conforme | Não conforme", "altObrigatorio": true, "justificativa": "..."},
  "tipoImagem": {"classificacao": "Decorativa | Funcional | Informativa | Complexa | Captcha | TextoEmImagem"},
  "recomendacao": {"altText": "...", "descricaoLonga": "..."},
  "codigoSugerido": "..."
}
Se a imagem for Decorativa, deixe altText e descricaoLonga vazios.
Se for Funcional, descreva a ação (por exemplo "Pesquisar"), não a aparência.
Escreva altText com no máximo 125 caracteres."#;

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((cut, _)) => &s[..cut],
        None => s,
    }
}

pub(crate) fn svg_text_prompt(markup: &str) -> String {
    format!(
        "Analise o elemento SVG abaixo segundo o critério WCAG 1.1.1 (conteúdo não textual) \
         e sugira um título acessível e, se necessário, uma descrição longa.\n\n\
         ```svg\n{}\n```\n\n{}",
        truncate(markup, MAX_MARKUP_CHARS),
        RESPONSE_SCHEMA
    )
}

pub(crate) fn img_text_prompt(src: &str, markup: &str) -> String {
    format!(
        "Analise a imagem abaixo segundo o critério WCAG 1.1.1 (conteúdo não textual). \
         Você não tem acesso aos pixels: use o nome do arquivo, o caminho e os atributos \
         da tag para inferir o propósito da imagem.\n\n\
         Origem: {}\nTag: {}\n\n{}",
        truncate(src, MAX_SRC_CHARS),
        truncate(markup, MAX_MARKUP_CHARS),
        RESPONSE_SCHEMA
    )
}

pub(crate) fn vision_prompt() -> String {
    format!(
        "Observe a imagem anexada e classifique-a segundo o critério WCAG 1.1.1 \
         (conteúdo não textual). Descreva o que ela comunica, não apenas o que mostra.\n\n{}",
        RESPONSE_SCHEMA
    )
}
