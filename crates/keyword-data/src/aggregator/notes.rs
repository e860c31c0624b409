//! Fixed human-readable notes, selected by provider state.

pub const TREND_NOTE_CONFIGURED: &str =
    "트렌드는 최근 1개월 구간의 상대값(0~100)입니다. 네이버 데이터랩 기준.";
pub const TREND_NOTE_UNCONFIGURED: &str = "네이버 API 키가 없어 트렌드를 조회하지 못했습니다. .env.local에 NAVER_CLIENT_ID, NAVER_CLIENT_SECRET을 추가하세요.";

pub const VOLUME_NOTE_FOUND: &str = "월간 검색량(최근 30일)은 네이버 검색광고 API(키워드도구) 기준입니다. 10 미만은 '<10'으로 표시됩니다.";
pub const VOLUME_NOTE_MISSING: &str =
    "검색광고 API는 호출했으나 해당 키워드 월간검색량을 가져오지 못했습니다.";
pub const VOLUME_NOTE_UNCONFIGURED: &str = "월간 검색량을 보려면 .env.local에 NAVER_SEARCHAD_CUSTOMER_ID, NAVER_SEARCHAD_ACCESS_LICENSE, NAVER_SEARCHAD_SECRET_KEY(검색광고 API)를 추가하세요. 네이버 검색광고 → 도구 → API 사용관리에서 발급 가능합니다.";

pub const KEYWORD_NOTE_FOUND: &str = "연관·인기 키워드는 OpenAI가 추천한 결과입니다.";
pub const KEYWORD_NOTE_MISSING: &str = "연관 키워드를 가져오지 못했습니다.";
pub const KEYWORD_NOTE_UNCONFIGURED: &str =
    "OpenAI API 키가 없어 연관 키워드를 생성하지 못했습니다. .env.local에 OPENAI_API_KEY를 추가하세요.";

pub fn trend_note(configured: bool) -> &'static str {
    if configured {
        TREND_NOTE_CONFIGURED
    } else {
        TREND_NOTE_UNCONFIGURED
    }
}

pub fn volume_note(configured: bool, found: bool) -> &'static str {
    match (configured, found) {
        (true, true) => VOLUME_NOTE_FOUND,
        (true, false) => VOLUME_NOTE_MISSING,
        (false, _) => VOLUME_NOTE_UNCONFIGURED,
    }
}

pub fn keyword_note(configured: bool, found: bool) -> &'static str {
    match (configured, found) {
        (true, true) => KEYWORD_NOTE_FOUND,
        (true, false) => KEYWORD_NOTE_MISSING,
        (false, _) => KEYWORD_NOTE_UNCONFIGURED,
    }
}
