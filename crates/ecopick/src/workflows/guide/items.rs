use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceptance {
    Accepted,
    NotAccepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemGroup {
    pub category: &'static str,
    pub acceptance: Acceptance,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackingTip {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Collection guide shown before customers fill in the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemGuide {
    pub groups: Vec<ItemGroup>,
    pub packing: Vec<PackingTip>,
}

/// Guide line mentioning a searched item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMatch {
    pub category: &'static str,
    pub acceptance: Acceptance,
    pub item: &'static str,
}

impl ItemGuide {
    pub fn standard() -> Self {
        use Acceptance::{Accepted, NotAccepted};

        let group = |category, acceptance, items| ItemGroup {
            category,
            acceptance,
            items,
        };

        Self {
            groups: vec![
                group(
                    "의류",
                    Accepted,
                    &[
                        "티셔츠, 셔츠, 블라우스",
                        "바지, 청바지, 슬랙스",
                        "원피스, 스커트",
                        "자켓, 코트, 패딩",
                        "니트, 가디건, 후드티",
                        "정장, 수트",
                    ],
                ),
                group(
                    "신발",
                    Accepted,
                    &[
                        "운동화, 스니커즈",
                        "구두, 로퍼",
                        "부츠 (롱부츠 제외)",
                        "샌들, 슬리퍼 (욕실용 제외)",
                    ],
                ),
                group(
                    "가방",
                    Accepted,
                    &[
                        "백팩, 크로스백",
                        "토트백, 숄더백",
                        "클러치, 파우치",
                        "에코백 (상태 양호 시)",
                    ],
                ),
                group(
                    "기타",
                    Accepted,
                    &[
                        "모자 (털모자 제외)",
                        "스카프, 머플러",
                        "홑이불, 담요",
                        "커튼, 베개커버",
                    ],
                ),
                group(
                    "침구류",
                    NotAccepted,
                    &[
                        "솜이불, 솜베개",
                        "방석, 쿠션",
                        "라텍스 침구",
                        "전기장판, 전기요",
                        "쿨매트",
                    ],
                ),
                group(
                    "속옷/잡화",
                    NotAccepted,
                    &["속옷, 팬티, 브라", "양말, 스타킹", "수영복", "잠옷, 수면바지"],
                ),
                group(
                    "특수의류",
                    NotAccepted,
                    &[
                        "교복, 유니폼",
                        "단체복, 조끼",
                        "스키복, 등산복 (고어텍스)",
                        "웨딩드레스",
                    ],
                ),
                group(
                    "신발/가방",
                    NotAccepted,
                    &[
                        "바퀴 달린 신발 (롤러스케이트, 힐리스)",
                        "캐리어, 바퀴 달린 가방",
                        "털신, 장화",
                        "가죽 롱부츠",
                    ],
                ),
                group(
                    "기타 불가",
                    NotAccepted,
                    &[
                        "심하게 오염/훼손된 의류",
                        "젖은 의류",
                        "애완동물 털/배설물 묻은 의류",
                        "인형, 봉제완구",
                    ],
                ),
            ],
            packing: vec![
                PackingTip {
                    title: "봉투/박스 준비",
                    detail: "비닐봉투, 종이봉투, 박스 등 어떤 것이든 OK!",
                },
                PackingTip {
                    title: "깨끗하게 세탁",
                    detail: "세탁 후 건조된 상태로 담아주세요",
                },
                PackingTip {
                    title: "신발은 짝 맞춰서",
                    detail: "신발은 반드시 짝을 맞춰 끈으로 묶어주세요",
                },
                PackingTip {
                    title: "문 앞에 배치",
                    detail: "수거 당일 아침에 문 앞에 두시면 됩니다",
                },
            ],
        }
    }

    pub fn groups_with(&self, acceptance: Acceptance) -> impl Iterator<Item = &ItemGroup> {
        self.groups
            .iter()
            .filter(move |group| group.acceptance == acceptance)
    }

    /// Guide lines containing `term`. An item can appear on both sides
    /// (e.g. boots are accepted, leather long boots are not).
    pub fn lookup(&self, term: &str) -> Vec<ItemMatch> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .items
                    .iter()
                    .filter(move |item| item.contains(term))
                    .map(move |item| ItemMatch {
                        category: group.category,
                        acceptance: group.acceptance,
                        item,
                    })
            })
            .collect()
    }
}

impl Default for ItemGuide {
    fn default() -> Self {
        Self::standard()
    }
}
