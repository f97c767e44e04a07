use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const MAX_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const STANDARD_ENTRIES: [FaqEntry; 9] = [
    FaqEntry {
        question: "어떤 옷이든 수거가 가능한가요?",
        answer: "네, 상태와 관계없이 모든 의류를 수거합니다. 깨끗한 옷은 기부되고, 상태가 좋지 않은 옷은 재활용 원료로 사용됩니다.",
    },
    FaqEntry {
        question: "얼마를 받을 수 있나요?",
        answer: "의류 1kg당 350원, 신발 400원, 가방 700원 기준으로 예상 정산 금액을 안내해 드립니다. 최종 금액은 수거 후 검수를 거쳐 확정됩니다.",
    },
    FaqEntry {
        question: "최소 수거 수량이 있나요?",
        answer: "의류, 신발, 가방 중 하나 이상이 있어야 신청할 수 있습니다. 냄비나 전자기기만 단독으로는 수거하지 않습니다.",
    },
    FaqEntry {
        question: "20kg 이하도 수거해 주시나요?",
        answer: "네, 20kg 이하는 무료 수거로 진행됩니다. 이 경우 의류, 신발, 가방은 정산되지 않고 추가 품목만 정산됩니다.",
    },
    FaqEntry {
        question: "컴퓨터나 휴대폰도 수거하나요?",
        answer: "컴퓨터 1대 3,000원, 모니터 1대 1,000원, 휴대폰 1대 500원, 냄비/프라이팬 1kg 200원으로 함께 수거합니다.",
    },
    FaqEntry {
        question: "수거 가능 지역은 어디인가요?",
        answer: "부천, 인천, 시흥, 안산, 광명, 김포 지역에서 수거합니다. 일부 도서 지역(거북섬, 대부도, 영흥, 강화, 옹진)은 제외됩니다.",
    },
    FaqEntry {
        question: "일요일에도 수거하나요?",
        answer: "일요일은 휴무입니다. 월요일부터 토요일 중 원하시는 날짜와 시간대를 선택해 주세요.",
    },
    FaqEntry {
        question: "비대면 수거는 어떻게 진행되나요?",
        answer: "수거 당일 아침 문 앞에 두시면 됩니다. 공동현관 비밀번호나 차량 사전 등록이 필요하면 신청서에 적어 주세요.",
    },
    FaqEntry {
        question: "500kg 이상 대량 수거도 가능한가요?",
        answer: "가능합니다. 신청서의 최대 수량을 넘는 대량 수거는 고객센터로 문의해 주시면 별도로 차량을 배정해 드립니다.",
    },
];

/// Hard-coded help content with search and paging.
#[derive(Debug, Clone)]
pub struct FaqCatalog {
    entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqPage {
    pub query: String,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub items: Vec<FaqEntry>,
}

impl FaqCatalog {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_ENTRIES.to_vec())
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Case-insensitive match on question or answer; a blank query matches all.
    pub fn search(&self, query: &str) -> Vec<&FaqEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.question.to_lowercase().contains(&needle)
                    || entry.answer.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Pages are 1-based. Pages past the end come back empty.
    pub fn page(&self, query: &str, page: usize, per_page: usize) -> FaqPage {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let page = page.max(1);
        let matches = self.search(query);
        let total = matches.len();
        let total_pages = total.div_ceil(per_page);

        let items = matches
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect();

        FaqPage {
            query: query.trim().to_string(),
            page,
            per_page,
            total,
            total_pages,
            items,
        }
    }
}

impl Default for FaqCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
