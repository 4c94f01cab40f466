use super::*;

pub(super) const HERO: HeroSlide = HeroSlide {
    badge: "Git 操作规范说明",
    title: &["从混乱到线性：", "Rebase + Merge 的团队实践"],
    subtitle: &[
        "打造清晰、线性、可追溯的代码提交历史，",
        "让版本管理像艺术一样优雅。",
    ],
    start_label: "开始",
    hints: &["↑↓ / Space 翻页", "←→ 导航"],
};

pub(super) const COMPARISON: ComparisonSlide = ComparisonSlide {
    title: "对比总结",
    label_header: "对比项",
    merge_header: "直接 Merge",
    rebase_header: "Rebase + Merge",
    rows: &[
        ComparisonRow {
            label: "提交历史",
            merge: "分叉复杂，难以阅读",
            rebase: "线性清晰，一目了然",
        },
        ComparisonRow {
            label: "Merge Commit",
            merge: "每次合并产生额外节点",
            rebase: "无额外节点 (fast-forward)",
        },
        ComparisonRow {
            label: "回滚操作",
            merge: "复杂，需指定父提交",
            rebase: "简单，直接 revert 即可",
        },
        ComparisonRow {
            label: "Bug 定位",
            merge: "git bisect 效率低",
            rebase: "git bisect 高效",
        },
        ComparisonRow {
            label: "代码审查",
            merge: "变更来源不清晰",
            rebase: "变更历史清晰可追溯",
        },
    ],
    note: "虽然 Rebase 有一定的学习成本，但在多人协作的大型项目中，其带来的长期维护收益远超传统 Merge。",
};

pub(super) const PRINCIPLES: PrinciplesSlide = PrinciplesSlide {
    title: "三个关键原则",
    cards: &[
        Card {
            icon: Some(Icon::RefreshCw),
            tone: Tone::Blue,
            title: "原则一：频繁同步",
            body: "定期将基准分支的最新更改 rebase 到功能分支，减少最后的冲突压力。",
            mono: false,
        },
        Card {
            icon: Some(Icon::CheckCircle),
            tone: Tone::Green,
            title: "原则二：合并前必变基",
            body: "在发起 PR/MR 之前，必须先执行 rebase，保证合并历史的干净纯粹。",
            mono: false,
        },
        Card {
            icon: Some(Icon::ShieldAlert),
            tone: Tone::Red,
            title: "原则三：保护公共分支",
            body: "基准分支只接受 Fast-Forward Merge。严禁对 main/develop 等分支进行 Rebase。",
            mono: false,
        },
    ],
};

pub(super) const FLOW: FlowSlide = FlowSlide {
    title: "完整工作流程",
    steps: &[
        FlowStep {
            icon: Icon::Plus,
            label: "创建分支",
        },
        FlowStep {
            icon: Icon::Code,
            label: "开发提交",
        },
        FlowStep {
            icon: Icon::RefreshCw,
            label: "同步基准",
        },
        FlowStep {
            icon: Icon::Combine,
            label: "Squash",
        },
        FlowStep {
            icon: Icon::RefreshCw,
            label: "执行 Rebase",
        },
        FlowStep {
            icon: Icon::ArrowRight,
            label: "强推 PR",
        },
        FlowStep {
            icon: Icon::ShieldCheck,
            label: "合并代码",
        },
    ],
    tips: &[
        Card {
            icon: Some(Icon::RefreshCw),
            tone: Tone::Blue,
            title: "变基原则",
            body: "始终在自己的功能分支上执行，不要动公共分支。",
            mono: false,
        },
        Card {
            icon: Some(Icon::Combine),
            tone: Tone::Purple,
            title: "压缩提交",
            body: "一个功能对应一个提交，方便代码回滚与审查。",
            mono: false,
        },
        Card {
            icon: Some(Icon::CheckSquare),
            tone: Tone::Green,
            title: "安全合并",
            body: "合并前确认已经是 Fast-forward 状态。",
            mono: false,
        },
    ],
};

pub(super) const CORE_IDEA: ContentSlide = ContentSlide {
    title: "核心思想",
    subtitle: None,
    bullets: &[],
    blocks: &[Block::Slogan {
        text: "\"先变基，后合并\"",
        caption: "在将功能分支合并到基准分支之前，先将功能分支的提交\"移植\"到基准分支的最新位置",
    }],
    centered: true,
};

pub(super) const STEP_CREATE: CodeSlide = CodeSlide {
    title: "步骤一：创建功能分支",
    subtitle: None,
    code: "# 确保基准分支是最新的\n\
           git checkout main\n\
           git pull origin main\n\
           \n\
           # 创建功能分支并切换\n\
           git checkout -b feature/user-login",
    table: Some(Table {
        headers: &["类型", "格式", "示例"],
        rows: &[
            &["新功能", "feature/<描述>", "feature/user-login"],
            &["Bug 修复", "fix/<描述>", "fix/cart-bug"],
            &["热修复", "hotfix/<描述>", "hotfix/security-patch"],
        ],
    }),
    bullets: &[],
};

pub(super) const STEP_COMMIT: CodeSlide = CodeSlide {
    title: "步骤二：开发并提交",
    subtitle: Some("Conventional Commits 规范"),
    code: "# 暂存更改\n\
           git add src/auth/login.js\n\
           \n\
           # 提交（使用规范的提交信息）\n\
           git commit -m \"feat(auth): 添加用户登录功能\"",
    table: Some(Table {
        headers: &["Type", "说明", "示例"],
        rows: &[
            &["feat", "新功能", "feat(auth): 添加登录"],
            &["fix", "修复", "fix(cart): 修复计算问题"],
            &["docs", "文档", "docs(readme): 更新说明"],
        ],
    }),
    bullets: &[],
};

pub(super) const STEP_SQUASH: CodeSlide = CodeSlide {
    title: "步骤四：合并提交 (Squash)",
    subtitle: Some("为什么要 Squash？"),
    code: "# 交互式 rebase\n\
           git rebase -i main\n\
           \n\
           # 编辑器中将 pick 改为 squash\n\
           pick a1b2c3d feat: 基础结构\n\
           squash b2c3d4e feat: 核心逻辑\n\
           squash c3d4e5f test: 单元测试",
    table: None,
    bullets: &["一个需求一个提交", "减少冲突频率", "简化代码回退", "历史清爽"],
};

pub(super) const STEP_REBASE: ContentSlide = ContentSlide {
    title: "步骤五：执行 Rebase",
    subtitle: None,
    bullets: &[],
    blocks: &[
        Block::Columns(&[
            Column {
                title: "Rebase 前",
                tone: Tone::Blue,
                icon: None,
                badge: None,
                boxed: false,
                body: &[Block::Terminal(
                    "    o---o---o (feature)\n   /\no---o---o---o---o (main)",
                )],
            },
            Column {
                title: "Rebase 后",
                tone: Tone::Green,
                icon: None,
                badge: None,
                boxed: false,
                body: &[Block::Terminal(
                    "o---o---o---o---o (main)\n                 \\\n                  o'--o'--o' (feature)",
                )],
            },
        ]),
        Block::Callout {
            icon: Icon::AlertTriangle,
            tone: Tone::Red,
            text: "警告：Rebase 会改写历史，只对自己分支执行！",
        },
    ],
    centered: false,
};

pub(super) const STEP_CONFLICTS: CodeSlide = CodeSlide {
    title: "步骤六：解决冲突",
    subtitle: Some("冲突不可怕，耐心即胜利"),
    code: "# 1. 查看冲突文件\n\
           git status\n\
           \n\
           # 2. 手动解决冲突标记 <<<<<<< HEAD\n\
           \n\
           # 3. 标记已解决\n\
           git add <file>\n\
           \n\
           # 4. 继续 rebase\n\
           git rebase --continue",
    table: None,
    bullets: &[],
};

pub(super) const STEP_PUSH: ContentSlide = ContentSlide {
    title: "步骤七：强制推送",
    subtitle: None,
    bullets: &[],
    blocks: &[
        Block::Cards(&[
            Card {
                icon: None,
                tone: Tone::Green,
                title: "推荐：安全强推",
                body: "git push --force-with-lease",
                mono: true,
            },
            Card {
                icon: None,
                tone: Tone::Red,
                title: "危险：暴力强推",
                body: "git push --force",
                mono: true,
            },
        ]),
        Block::Note {
            icon: Icon::Zap,
            title: "--force-with-lease 的奥秘",
            body: "它会检查远程分支是否有你不知道的新提交，防止覆盖他人的工作成果。这是团队协作的黄金底线。",
        },
    ],
    centered: false,
};

pub(super) const GOLDEN_RULES: ContentSlide = ContentSlide {
    title: "总结：三大黄金法则",
    subtitle: None,
    bullets: &[],
    blocks: &[Block::Rules(&[
        Rule {
            number: "01",
            tone: Tone::Blue,
            text: "只 Rebase 私有分支",
        },
        Rule {
            number: "02",
            tone: Tone::Purple,
            text: "先 Rebase 后 Merge",
        },
        Rule {
            number: "03",
            tone: Tone::Pink,
            text: "使用 --force-with-lease",
        },
    ])],
    centered: true,
};

pub(super) static SLIDES: &[Slide] = &[
    Slide::Hero(HERO),
    Slide::Content(ContentSlide {
        title: "为什么需要 Rebase + Merge？",
        subtitle: None,
        bullets: &[
            Bullet {
                icon: Some((Icon::Zap, Tone::Yellow)),
                text: "保持代码提交历史的线性清晰",
                sub: Some("没有乱七八糟的交叉线"),
            },
            Bullet {
                icon: Some((Icon::GitMerge, Tone::Blue)),
                text: "避免产生不必要的合并节点",
                sub: Some("告别冗余的 'Merge branch...' 提交"),
            },
            Bullet {
                icon: Some((Icon::RotateCcw, Tone::Green)),
                text: "简化代码回滚操作",
                sub: Some("直接 Revert 即可，无需指定父节点"),
            },
            Bullet {
                icon: Some((Icon::History, Tone::Purple)),
                text: "提高代码审查效率",
                sub: Some("清晰的变更来源，一目了然"),
            },
        ],
        blocks: &[],
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
    Slide::Content(CORE_IDEA),
    Slide::Principles(PRINCIPLES),
    Slide::Flow(FLOW),
    Slide::Code(STEP_CREATE),
    Slide::Code(STEP_COMMIT),
    Slide::Content(ContentSlide {
        title: "步骤三：同步基准分支",
        subtitle: None,
        bullets: &[],
        blocks: &[
            Block::Terminal("git checkout main\ngit pull origin main\ngit checkout feature/user-login"),
            Block::Callout {
                icon: Icon::AlertTriangle,
                tone: Tone::Yellow,
                text: "重要：这一步是为了更新本地基准分支引用，为下一步的 rebase 做准备。",
            },
        ],
        centered: false,
    }),
    Slide::Code(STEP_SQUASH),
    Slide::Content(STEP_REBASE),
    Slide::Code(STEP_CONFLICTS),
    Slide::Content(STEP_PUSH),
    Slide::Content(ContentSlide {
        title: "步骤八 & 九：合并并清理",
        subtitle: None,
        bullets: &[],
        blocks: &[Block::Columns(&[
            Column {
                title: "发起 PR/MR",
                tone: Tone::Blue,
                icon: None,
                badge: Some("8"),
                boxed: false,
                body: &[Block::List {
                    marker: Marker::Dot,
                    items: &["关联 Issue", "指定 Reviewer", "详细描述变更内容"],
                }],
            },
            Column {
                title: "合并并删除",
                tone: Tone::Green,
                icon: None,
                badge: Some("9"),
                boxed: false,
                body: &[Block::Terminal(
                    "git checkout main\ngit merge feature/xxx\ngit push origin main\ngit branch -d feature/xxx",
                )],
            },
        ])],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "常用命令速查",
        subtitle: None,
        bullets: &[],
        blocks: &[Block::Cards(&[
            Card {
                icon: None,
                tone: Tone::Blue,
                title: "同步基准",
                body: "git checkout main && git pull",
                mono: true,
            },
            Card {
                icon: None,
                tone: Tone::Blue,
                title: "交互式合并",
                body: "git rebase -i main",
                mono: true,
            },
            Card {
                icon: None,
                tone: Tone::Blue,
                title: "变基到最新",
                body: "git rebase main",
                mono: true,
            },
            Card {
                icon: None,
                tone: Tone::Blue,
                title: "安全推送",
                body: "git push --force-with-lease",
                mono: true,
            },
        ])],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "常见问题 Q&A",
        subtitle: None,
        bullets: &[
            Bullet {
                icon: Some((Icon::CheckCircle, Tone::Blue)),
                text: "Q: Rebase 和 Merge 的区别？",
                sub: Some("A: Rebase 保持线性历史，Merge 保留完整分支轨迹。"),
            },
            Bullet {
                icon: Some((Icon::CheckCircle, Tone::Blue)),
                text: "Q: 什么时候用 Rebase？",
                sub: Some("A: 用于同步基准到功能分支；Merge 用于最终合并回主干。"),
            },
            Bullet {
                icon: Some((Icon::CheckCircle, Tone::Blue)),
                text: "Q: 公共分支可以 Rebase 吗？",
                sub: Some("A: 绝对不行！只能对自己的私有功能分支执行。"),
            },
        ],
        blocks: &[],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "何时禁止使用 Rebase",
        subtitle: None,
        bullets: &[],
        blocks: &[Block::Columns(&[
            Column {
                title: "禁止场景",
                tone: Tone::Red,
                icon: Some(Icon::AlertTriangle),
                badge: None,
                boxed: true,
                body: &[Block::List {
                    marker: Marker::Cross,
                    items: &[
                        "公共分支 (main/develop)",
                        "已被他人使用的协作分支",
                        "已经合并完成的分支",
                        "必须保留审计完整历史的场景",
                    ],
                }],
            },
            Column {
                title: "适用场景",
                tone: Tone::Green,
                icon: Some(Icon::CheckCircle),
                badge: None,
                boxed: true,
                body: &[Block::List {
                    marker: Marker::Check,
                    items: &[
                        "自己的私有功能分支",
                        "提交 PR 之前的历史梳理",
                        "同步基准分支的最新变更",
                    ],
                }],
            },
        ])],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "提交规范 (Conventional)",
        subtitle: None,
        bullets: &[
            Bullet {
                icon: Some((Icon::Terminal, Tone::Blue)),
                text: "feat: 新功能",
                sub: Some("新功能的引入"),
            },
            Bullet {
                icon: Some((Icon::Terminal, Tone::Red)),
                text: "fix: 修复",
                sub: Some("Bug 修复"),
            },
            Bullet {
                icon: Some((Icon::Terminal, Tone::Green)),
                text: "docs: 文档",
                sub: Some("仅文档更新"),
            },
            Bullet {
                icon: Some((Icon::Terminal, Tone::Purple)),
                text: "refactor: 重构",
                sub: Some("非功能性代码变更"),
            },
        ],
        blocks: &[],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "分支命名规范",
        subtitle: None,
        bullets: &[],
        blocks: &[
            Block::Cards(&[
                Card {
                    icon: None,
                    tone: Tone::Gray,
                    title: "功能开发",
                    body: "feature/user-login",
                    mono: true,
                },
                Card {
                    icon: None,
                    tone: Tone::Gray,
                    title: "缺陷修复",
                    body: "fix/cart-bug",
                    mono: true,
                },
                Card {
                    icon: None,
                    tone: Tone::Gray,
                    title: "紧急修复",
                    body: "hotfix/security-patch",
                    mono: true,
                },
                Card {
                    icon: None,
                    tone: Tone::Gray,
                    title: "版本发布",
                    body: "release/v1.0.0",
                    mono: true,
                },
            ]),
            Block::Checks(&["全部小写", "连字符分隔", "简洁明了"]),
        ],
        centered: false,
    }),
    Slide::Content(ContentSlide {
        title: "协作建议",
        subtitle: None,
        bullets: &[
            Bullet {
                icon: None,
                text: "一个提交只做一件事 (Atomicity)",
                sub: None,
            },
            Bullet {
                icon: None,
                text: "提交后代码必须能运行",
                sub: None,
            },
            Bullet {
                icon: None,
                text: "PR 前务必先进行自我审查",
                sub: None,
            },
            Bullet {
                icon: None,
                text: "确保测试 100% 通过再 Rebase",
                sub: None,
            },
        ],
        blocks: &[],
        centered: false,
    }),
    Slide::Content(GOLDEN_RULES),
    Slide::Content(ContentSlide {
        title: "谢谢观看",
        subtitle: None,
        bullets: &[],
        blocks: &[
            Block::Emblem(Icon::CheckCircle, Tone::Blue),
            Block::Text("有问题欢迎随时交流"),
            Block::Footnote("文档版本: 1.0 | 企迈研发团队"),
        ],
        centered: true,
    }),
];
