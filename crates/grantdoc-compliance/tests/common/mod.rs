//! Shared fixtures: a complete JIZOKUKA application.

use grantdoc_core::DocumentSection;

pub const JIZOKUKA_SECTIONS: [(&str, &str, &str); 8] = [
    (
        "company_overview",
        "企業概要",
        "当社は2012年に創業した従業員6名の和菓子製造販売業者である。本店は駅前商店街にあり、\
         年間売上高は約4,800万円、来店客数は1日平均120人である。創業以来、地元産の小豆と米粉にこだわった商品づくりを続けている。",
    ),
    (
        "customer_needs",
        "顧客ニーズと市場の動向",
        "近年、健康志向の高まりから低糖質の和菓子を求める声が増えている。当社の来店客アンケート（2023年、回答数210件）では、\
         約38%が「甘さ控えめの商品」を希望した。また贈答需要は法人向けを中心に前年比15%伸びている。",
    ),
    (
        "strengths",
        "自社や自社の提供する商品・サービスの強み",
        "当社の強みは、創業時から受け継ぐ手づくりの製法と、季節ごとに12種類以上の新商品を開発する企画力である。\
         主力の栗きんとんは地域の品評会で3年連続入賞しており、リピート率は約65%に達している。",
    ),
    (
        "management_policy",
        "経営方針・目標と今後のプラン",
        "今後3年間で売上高を6,000万円に拡大することを目標とする。そのために、店舗販売に加えてオンライン販売と法人向け贈答の二本柱を育てる。\
         2025年度までに新規取引先を20社獲得し、売上に占める法人比率を25%まで高める。",
    ),
    (
        "project_name",
        "補助事業で行う事業名",
        "低糖質和菓子の新商品開発とECサイト構築による全国販路の開拓事業。本事業では、糖質を従来比30%削減した商品を4品目開発し、\
         自社ECサイトと大手モール2店舗で販売を開始する。",
    ),
    (
        "sales_expansion",
        "販路開拓等の取組内容",
        "第一に、自社ECサイトを構築し、商品写真と製造工程の動画を掲載する（制作費約80万円）。第二に、法人向けカタログを500部作成し、\
         市内の企業150社へ郵送とメールで案内する。第三に、地域の物産展へ年2回出展し、新商品の試食販売を行う。",
    ),
    (
        "efficiency",
        "業務効率化の取組内容",
        "受注管理を紙台帳からクラウド型の販売管理システムに移行し、受注処理時間を1件あたり15分から5分に短縮する。\
         これにより月間約40時間の作業時間を削減し、その時間を新商品の開発に充てる。",
    ),
    (
        "expected_effect",
        "補助事業の効果",
        "本事業により、初年度はEC経由の売上として年間600万円、法人向け贈答として年間400万円の新規売上を見込む。\
         3年後には全体の売上高を現状比25%増の6,000万円とし、新たに2名のパート従業員を雇用する計画である。",
    ),
];

pub fn jizokuka_document() -> Vec<DocumentSection> {
    JIZOKUKA_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, (key, title, content))| {
            DocumentSection::new(*key, *title)
                .with_application("app-001")
                .with_order(i as i32)
                .with_ai_content(*content)
        })
        .collect()
}
