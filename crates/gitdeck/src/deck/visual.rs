use super::full::{
    COMPARISON, FLOW, GOLDEN_RULES, HERO, PRINCIPLES, STEP_COMMIT, STEP_CONFLICTS,
    STEP_CREATE, STEP_PUSH, STEP_REBASE, STEP_SQUASH,
};
use super::*;

pub(super) static SLIDES: &[Slide] = &[
    Slide::Hero(HERO),
    Slide::Content(ContentSlide {
        title: "混乱是怎样产生的？",
        subtitle: Some("五个人，一次检出，无数次 Standard Merge"),
        bullets: &[],
        blocks: &[Block::Diagram(DiagramKind::Chaos)],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "两种历史，两种命运",
        subtitle: None,
        bullets: &[],
        blocks: &[Block::Diagram(DiagramKind::StaticComparison { minimal: false })],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "直观对比：历史演进",
        subtitle: Some("点击下方按钮观察两种工作流的差异"),
        bullets: &[],
        blocks: &[Block::Diagram(DiagramKind::GitFlow)],
        centered: false,
    }),
    Slide::Comparison(COMPARISON),
    Slide::Content(ContentSlide {
        title: "核心思想",
        subtitle: None,
        bullets: &[],
        blocks: &[
            Block::Slogan {
                text: "\"先变基，后合并\"",
                caption: "把功能分支的提交\"移植\"到基准分支的最新位置，再合并",
            },
            Block::Diagram(DiagramKind::StaticComparison { minimal: true }),
        ],
        centered: true,
    }),
    Slide::Principles(PRINCIPLES),
    Slide::Flow(FLOW),
    Slide::Code(STEP_CREATE),
    Slide::Code(STEP_COMMIT),
    Slide::Code(STEP_SQUASH),
    Slide::Content(STEP_REBASE),
    Slide::Code(STEP_CONFLICTS),
    Slide::Content(STEP_PUSH),
    Slide::Content(ContentSlide {
        title: "变基之后的主干",
        subtitle: Some("git log --oneline main"),
        bullets: &[],
        blocks: &[Block::Diagram(DiagramKind::LinearGraph)],
        centered: false,
    }),
    Slide::Content(GOLDEN_RULES),
    Slide::ThankYou,
];
