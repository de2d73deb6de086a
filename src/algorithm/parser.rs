//! Extractor heurístico de prerequisitos.
//!
//! El texto de un catálogo es prosa libre, no un lenguaje formal: aquí no se
//! valida nada, sólo se extrae lo que tiene forma estricta de código de curso.
//! Cada etapa es una función pura sobre strings y se puede probar por separado:
//!
//! 1. `truncate_at_consent`: corta en "consent of ..."
//! 2. `split_conjunctions`: separa por la palabra "and" (y expande listas
//!    enumeradas "A, B and C")
//! 3. `extract_alternatives`: alternativas por "or", "/", "," y ";"
//! 4. `scan_course_codes` / `fallback_code`: reconocimiento de códigos

use crate::algorithm::normalize::{
    canonical_code, collapse_whitespace, MAX_DIGITS, MAX_LETTERS, MIN_DIGITS, MIN_LETTERS,
};
use crate::models::{CourseCode, RequirementGroup, RequirementSet};
use std::collections::HashSet;
use tracing::debug;

/// Convierte la cláusula de requisitos de un curso en un AND de grupos OR.
///
/// Las cláusulas sin ningún código reconocible se descartan: el curso nunca
/// se penaliza por restricciones que no son códigos (unidades, nivel, etc.).
pub fn parse_requirements(text: &str) -> RequirementSet {
    let kept = truncate_at_consent(text);
    if kept.is_empty() {
        return Vec::new();
    }

    let mut groups: RequirementSet = Vec::new();
    for clause in split_conjunctions(&kept) {
        match RequirementGroup::new(extract_alternatives(&clause)) {
            Some(group) => groups.push(group),
            None => debug!(clause = %clause, "cláusula sin códigos de curso, se descarta"),
        }
    }
    groups
}

/// Descarta todo desde "consent of" (sin distinguir mayúsculas). El texto
/// devuelto ya tiene los espacios colapsados.
pub fn truncate_at_consent(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    for i in 0..words.len() {
        let head = words[i].trim_start_matches(|c: char| !c.is_alphanumeric());
        if !head.eq_ignore_ascii_case("consent") {
            continue;
        }
        let next = words
            .get(i + 1)
            .map(|w| w.trim_end_matches(|c: char| !c.is_alphanumeric()));
        if next.is_some_and(|w| w.eq_ignore_ascii_case("of")) {
            return words[..i].join(" ");
        }
    }
    words.join(" ")
}

/// Separa por la palabra suelta "and" y limpia cada cláusula de espacios,
/// `.` y `;`. Una cláusula que precede a otra y enumera cursos con comas
/// ("A, B and C"), sin "or" ni "one of" a nivel superior, se abre en una
/// cláusula por elemento.
pub fn split_conjunctions(text: &str) -> Vec<String> {
    let clauses: Vec<String> = split_on_word(&collapse_whitespace(text), "and")
        .iter()
        .map(|c| trim_clause(c))
        .filter(|c| !c.is_empty())
        .collect();

    let last = clauses.len().saturating_sub(1);
    let mut out: Vec<String> = Vec::with_capacity(clauses.len());
    for (i, clause) in clauses.into_iter().enumerate() {
        if i < last && is_serial_list(&clause) {
            out.extend(
                split_top_level_commas(&clause)
                    .iter()
                    .map(|c| trim_clause(c))
                    .filter(|c| !c.is_empty()),
            );
        } else {
            out.push(clause);
        }
    }
    out
}

/// Extrae los códigos alternativos de una cláusula, sin duplicados y en
/// orden de aparición.
pub fn extract_alternatives(clause: &str) -> Vec<CourseCode> {
    let body = strip_one_of(clause).unwrap_or(clause);

    let mut candidates: Vec<CourseCode> = Vec::new();
    for alternative in split_on_word(body, "or") {
        // "/" siempre equivale a "or"
        let alternative = alternative.replace('/', ",");
        for token in alternative.split([',', ';']) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let found = scan_course_codes(token);
            if !found.is_empty() {
                candidates.extend(found);
            } else if let Some(code) = fallback_code(token) {
                candidates.push(code);
            } else {
                debug!(token, "fragmento sin código de curso");
            }
        }
    }

    let mut seen: HashSet<CourseCode> = HashSet::new();
    candidates.retain(|c| seen.insert(c.clone()));
    candidates
}

/// Busca todas las apariciones del patrón de código dentro de `token`
/// (incluido el texto entre paréntesis): 2-5 mayúsculas, espacio opcional,
/// 2-4 dígitos y una letra de sufijo opcional.
pub fn scan_course_codes(token: &str) -> Vec<CourseCode> {
    let chars: Vec<char> = token.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match match_code_at(&chars, i) {
            Some((code, end)) => {
                found.push(code);
                i = end;
            }
            None => i += 1,
        }
    }
    found
}

/// Acepta el fragmento completo si, tras quitar todo lo que no es
/// alfanumérico o espacio, calza exactamente con el patrón ("CHEM-102").
pub fn fallback_code(token: &str) -> Option<CourseCode> {
    let stripped: String = token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();
    let chars: Vec<char> = stripped.trim().chars().collect();
    match match_code_at(&chars, 0) {
        Some((code, end)) if end == chars.len() => Some(code),
        _ => None,
    }
}

/// Intenta leer un código que empieza exactamente en `start`. Devuelve el
/// código en forma canónica ("LETRAS DIGITOS[SUFIJO]") y la posición final.
///
/// Sólo reconoce mayúsculas del texto original: "chem 102" o "Chem 102" en
/// prosa no se extraen.
fn match_code_at(chars: &[char], start: usize) -> Option<(CourseCode, usize)> {
    if start > 0 && chars[start - 1].is_alphabetic() {
        return None;
    }

    let mut i = start;
    while i < chars.len() && chars[i].is_ascii_uppercase() {
        i += 1;
    }
    if !(MIN_LETTERS..=MAX_LETTERS).contains(&(i - start)) {
        return None;
    }
    let letters_end = i;

    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    let digits_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&(i - digits_start)) {
        return None;
    }

    let mut end = i;
    let suffix_ok = chars.get(end).is_some_and(|c| c.is_ascii_uppercase())
        && !chars.get(end + 1).is_some_and(|c| c.is_alphanumeric());
    if suffix_ok {
        end += 1;
    }
    if chars.get(end).is_some_and(|c| c.is_alphanumeric()) {
        return None;
    }

    let matched: String = chars[start..end].iter().collect();
    Some((canonical_code(&matched), end))
}

/// Divide por una palabra suelta (sin distinguir mayúsculas). Equivale a
/// partir en `\s+word\s+`.
fn split_on_word(text: &str, word: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for w in text.split_whitespace() {
        if w.eq_ignore_ascii_case(word) {
            parts.push(current.join(" "));
            current.clear();
        } else {
            current.push(w);
        }
    }
    parts.push(current.join(" "));
    parts
}

fn trim_clause(clause: &str) -> String {
    clause
        .trim_matches(|c: char| c.is_whitespace() || c == '.' || c == ';')
        .to_string()
}

/// Quita el marcador inicial "one of" (con ":" o "-" opcional). `None` si
/// la cláusula no lo tiene.
fn strip_one_of(clause: &str) -> Option<&str> {
    let trimmed = clause.trim_start();
    let head = trimmed.get(..6)?;
    if !head.eq_ignore_ascii_case("one of") {
        return None;
    }
    let rest = &trimmed[6..];
    if rest.chars().next().is_some_and(|c| c.is_alphanumeric()) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix(':')
        .or_else(|| rest.strip_prefix('-'))
        .unwrap_or(rest);
    Some(rest.trim_start())
}

fn is_serial_list(clause: &str) -> bool {
    strip_one_of(clause).is_none()
        && !has_top_level_or(clause)
        && split_top_level_commas(clause).len() > 1
}

fn has_top_level_or(clause: &str) -> bool {
    let mut depth: i32 = 0;
    for w in clause.split_whitespace() {
        if depth == 0 && w.eq_ignore_ascii_case("or") {
            return true;
        }
        for c in w.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth = (depth - 1).max(0),
                _ => {}
            }
        }
    }
    false
}

fn split_top_level_commas(clause: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    for c in clause.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = (depth - 1).max(0),
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    parts.push(current);
    parts
}
