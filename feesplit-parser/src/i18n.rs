#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("解析できません: {error}")
}

#[cfg(feature = "ja")]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("解析されていない入力: {input}")
}

#[cfg(not(feature = "ja"))]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("Could not parse: {error}")
}

#[cfg(not(feature = "ja"))]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("Unparsed input: {input}")
}

#[cfg(feature = "ja")]
pub fn reserved_name_detail(word: &str) -> String {
    format!("'{word}' は予約語です。料金は '{word} fee <金額>'、参加者名は \"{word}\" のように引用符で囲んでください")
}

#[cfg(not(feature = "ja"))]
pub fn reserved_name_detail(word: &str) -> String {
    format!("'{word}' is reserved; write '{word} fee <amount>' for a fee or quote the name as \"{word}\"")
}
