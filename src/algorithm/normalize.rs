use crate::models::CourseCode;

pub(crate) const MIN_LETTERS: usize = 2;
pub(crate) const MAX_LETTERS: usize = 5;
pub(crate) const MIN_DIGITS: usize = 2;
pub(crate) const MAX_DIGITS: usize = 4;

/// Normaliza un identificador de curso: colapsa cualquier secuencia de
/// espacios en uno solo, recorta extremos y pasa a mayúsculas.
///
/// No valida la forma del código (eso ocurre al extraer). Es idempotente.
pub fn normalize(raw: &str) -> CourseCode {
    CourseCode::from_normalized(collapse_whitespace(raw).to_uppercase())
}

/// Clave de un curso: `normalize` y, si el resultado tiene forma estricta de
/// código ("CHEM102", "CHEM 102", "CMPUT 174A"), exactamente un espacio
/// entre letras y dígitos. Cualquier otro texto queda sólo normalizado.
///
/// Todo código que entra al motor (claves del catálogo, códigos extraídos del
/// texto, aprobados) pasa por aquí, así "CHEM102" y "chem 102" son el mismo
/// nodo.
pub fn canonical_code(raw: &str) -> CourseCode {
    let normalized = normalize(raw);
    match split_code_shape(normalized.as_str()) {
        Some((letters, number)) => CourseCode::from_normalized(format!("{} {}", letters, number)),
        None => normalized,
    }
}

/// Separa "LETRAS[ ]DIGITOS[SUFIJO]" en sus dos mitades. `None` si el texto
/// no tiene exactamente esa forma.
fn split_code_shape(s: &str) -> Option<(&str, &str)> {
    let letters_end = s.find(|c: char| !c.is_ascii_uppercase()).unwrap_or(s.len());
    let letters = &s[..letters_end];
    let rest = &s[letters_end..];
    let number = rest.strip_prefix(' ').unwrap_or(rest);
    let digits_end = number.find(|c: char| !c.is_ascii_digit()).unwrap_or(number.len());
    let suffix = &number[digits_end..];

    let shape_ok = (MIN_LETTERS..=MAX_LETTERS).contains(&letters.len())
        && (MIN_DIGITS..=MAX_DIGITS).contains(&digits_end)
        && (suffix.is_empty() || (suffix.len() == 1 && suffix.chars().all(|c| c.is_ascii_uppercase())));
    shape_ok.then_some((letters, number))
}

/// Colapsa espacios (incluye tabs y saltos de línea) y recorta.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
