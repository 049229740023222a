// Prompt assembly for summarization and direct answers
// Author: kelexine (https://github.com/kelexine)

use crate::summarizer::models::{Language, LengthTier, ThematicMode};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Maximum characters of article content included in a prompt.
pub const MAX_PROMPT_CONTENT_CHARS: usize = 6000;

/// Word-count target per length tier.
pub fn word_target(tier: LengthTier) -> &'static str {
    match tier {
        LengthTier::Short => "150-200 words",
        LengthTier::Medium => "250-350 words",
        LengthTier::Long => "400-500 words",
    }
}

/// Output-language instruction appended to every prompt.
pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::English => "Write the summary in English.",
        Language::French => "Écris le résumé en français.",
        Language::Spanish => "Escribe el resumen en español.",
    }
}

/// Title used for model-only answers, where no article title exists.
pub fn fallback_title(language: Language, theme: &str) -> String {
    match language {
        Language::English => format!("About: {theme}"),
        Language::French => format!("Informations sur : {theme}"),
        Language::Spanish => format!("Información sobre: {theme}"),
    }
}

/// Lazily initialized instruction table, keyed by `"<lang>:<mode>"`.
static MODE_INSTRUCTIONS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn instruction_table() -> &'static HashMap<&'static str, &'static str> {
    MODE_INSTRUCTIONS.get_or_init(|| {
        let mut m = HashMap::new();

        m.insert("en:historique", "- Focus on historical dates, events, periods, and key historical figures\n- Emphasize chronological order and historical context\n- Highlight the historical significance and impact");
        m.insert("en:scientifique", "- Focus on scientific definitions, theories, experiments, and discoveries\n- Emphasize technical concepts and scientific methodology\n- Include key scientific principles and breakthroughs");
        m.insert("en:biographique", "- Focus on the person's life journey, important dates, and achievements\n- Emphasize key life events, career milestones, and personal impact\n- Structure chronologically when relevant");
        m.insert("en:scolaire", "- Use simple, clear explanations suitable for students\n- Focus on educational aspects and learning points\n- Make complex concepts accessible and easy to understand");
        m.insert("en:culture", "- Focus on social, artistic, and cultural impact\n- Emphasize cultural significance and influence on society\n- Highlight artistic, literary, or cultural contributions");
        m.insert("en:faits", "- Present essential facts in a clear, concise format\n- Structure as key points suitable for revision notes\n- Focus on the most important and memorable information");

        m.insert("fr:historique", "- Concentre-toi sur les dates historiques, événements, périodes et personnages historiques clés\n- Mets l'accent sur l'ordre chronologique et le contexte historique\n- Souligne la signification et l'impact historiques");
        m.insert("fr:scientifique", "- Concentre-toi sur les définitions scientifiques, théories, expériences et découvertes\n- Mets l'accent sur les concepts techniques et la méthodologie scientifique\n- Inclus les principes scientifiques et percées importantes");
        m.insert("fr:biographique", "- Concentre-toi sur le parcours de vie, les dates importantes et les réalisations\n- Mets l'accent sur les événements clés de la vie, les étapes de carrière et l'impact personnel\n- Structure chronologiquement quand pertinent");
        m.insert("fr:scolaire", "- Utilise des explications simples et claires adaptées aux étudiants\n- Concentre-toi sur les aspects éducatifs et les points d'apprentissage\n- Rends les concepts complexes accessibles et faciles à comprendre");
        m.insert("fr:culture", "- Concentre-toi sur l'impact social, artistique et culturel\n- Mets l'accent sur la signification culturelle et l'influence sur la société\n- Souligne les contributions artistiques, littéraires ou culturelles");
        m.insert("fr:faits", "- Présente les faits essentiels dans un format clair et concis\n- Structure comme des points clés adaptés aux notes de révision\n- Concentre-toi sur les informations les plus importantes et mémorables");

        m.insert("es:historique", "- Enfócate en fechas históricas, eventos, períodos y figuras históricas clave\n- Enfatiza el orden cronológico y el contexto histórico\n- Destaca la significación e impacto históricos");
        m.insert("es:scientifique", "- Enfócate en definiciones científicas, teorías, experimentos y descubrimientos\n- Enfatiza conceptos técnicos y metodología científica\n- Incluye principios científicos y avances importantes");
        m.insert("es:biographique", "- Enfócate en el recorrido de vida, fechas importantes y logros\n- Enfatiza eventos clave de la vida, hitos profesionales e impacto personal\n- Estructura cronológicamente cuando sea relevante");
        m.insert("es:scolaire", "- Usa explicaciones simples y claras adecuadas para estudiantes\n- Enfócate en aspectos educativos y puntos de aprendizaje\n- Haz conceptos complejos accesibles y fáciles de entender");
        m.insert("es:culture", "- Enfócate en el impacto social, artístico y cultural\n- Enfatiza la significación cultural y la influencia en la sociedad\n- Destaca contribuciones artísticas, literarias o culturales");
        m.insert("es:faits", "- Presenta hechos esenciales en un formato claro y conciso\n- Estructura como puntos clave adecuados para notas de revisión\n- Enfócate en la información más importante y memorable");

        m
    })
}

/// Emphasis instruction for a (language, mode) pair; empty for `general`.
pub fn mode_instruction(language: Language, mode: ThematicMode) -> &'static str {
    if mode == ThematicMode::General {
        return "";
    }
    let key = format!("{}:{}", language.code(), mode.as_str());
    instruction_table().get(key.as_str()).copied().unwrap_or("")
}

/// Truncate `content` to `MAX_PROMPT_CONTENT_CHARS`, marking the cut.
fn truncate_content(content: &str) -> String {
    if content.chars().count() > MAX_PROMPT_CONTENT_CHARS {
        let truncated: String = content.chars().take(MAX_PROMPT_CONTENT_CHARS).collect();
        format!("{truncated}...")
    } else {
        content.to_string()
    }
}

/// Prompt for condensing a located Wikipedia article.
pub fn summary_prompt(
    title: &str,
    content: &str,
    tier: LengthTier,
    language: Language,
    mode: ThematicMode,
) -> String {
    let content = truncate_content(content);
    let mut prompt = format!(
        "You are an expert summarizer. Here is the content of a Wikipedia page about \"{title}\".\n\
         \n\
         Wikipedia Content:\n\
         {content}\n\
         \n\
         Instructions: Create a clear, informative and well-structured summary of this Wikipedia page.\n\
         - The summary should be approximately {target}\n\
         - Use accessible and precise language\n\
         - Structure the text in coherent paragraphs\n\
         - Focus on the most important information\n\
         - Write in plain text, without markdown formatting\n\
         - {lang_instruction}",
        target = word_target(tier),
        lang_instruction = language_instruction(language),
    );

    let emphasis = mode_instruction(language, mode);
    if !emphasis.is_empty() {
        prompt.push_str(&format!("\n\nSpecial focus for this summary:\n{emphasis}"));
    }

    prompt.push_str("\n\nSummary:");
    prompt
}

/// Prompt for answering directly on a topic with no article available.
pub fn direct_prompt(
    theme: &str,
    tier: LengthTier,
    language: Language,
    mode: ThematicMode,
) -> String {
    let mut prompt = format!(
        "You are an expert assistant who must provide complete information on a subject.\n\
         \n\
         Requested topic: \"{theme}\"\n\
         \n\
         Instructions: Provide a complete and informative explanation of this topic.\n\
         - Explain what it is, its context, its importance\n\
         - Give useful and interesting details\n\
         - The text should be approximately {target}\n\
         - Use clear and accessible language\n\
         - Structure in coherent paragraphs\n\
         - Write in plain text, without markdown formatting\n\
         - {lang_instruction}",
        target = word_target(tier),
        lang_instruction = language_instruction(language),
    );

    let emphasis = mode_instruction(language, mode);
    if !emphasis.is_empty() {
        prompt.push_str(&format!("\n\nSpecial focus for this explanation:\n{emphasis}"));
    }

    prompt.push_str("\n\nResponse:");
    prompt
}
