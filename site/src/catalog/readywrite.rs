// Shipped ReadyWrite copy. Edit here (or export with `readywrite catalog`) to rebrand.

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn catalog() -> Catalog {
    Catalog {
        brand: BrandConfig {
            name: "ReadyWrite".into(),
            byline: "Write by voice".into(),
            tagline: "Turn your voice into a book—without losing your voice.".into(),
            subtagline: "Record. Transcribe. Auto-structure chapters. Edit with AI that keeps your tone and message.".into(),
            cta_primary: "Start Free".into(),
            cta_secondary: "Watch Demo".into(),
            login_label: "Log in".into(),
            menu_label: "Toggle menu".into(),
        },
        nav: vec![
            NavLink { label: "How it works".into(), target: SectionId::How },
            NavLink { label: "Features".into(), target: SectionId::Features },
            NavLink { label: "Pricing".into(), target: SectionId::Pricing },
            NavLink { label: "Examples".into(), target: SectionId::Examples },
            NavLink { label: "FAQ".into(), target: SectionId::Faq },
        ],
        hero: HeroContent {
            pills: strings(&[
                "Built for authors",
                "Perfect for sermons & teaching",
                "Export to DOCX",
            ]),
            metrics: vec![
                Metric { value: "3×".into(), label: "Faster drafting".into() },
                Metric { value: "1-click".into(), label: "Chapter structure".into() },
                Metric { value: "Your".into(), label: "Voice stays yours".into() },
            ],
            reassurance: "No credit card required to start.".into(),
            preview: DraftPreview {
                title: "Live draft".into(),
                subtitle: "Auto-structured chapters".into(),
                badge: "Demo".into(),
                chapters: vec![
                    PreviewChapter {
                        label: "Chapter 1".into(),
                        title: "The Moment the Idea Hit Me".into(),
                        lines: vec![92, 84, 70],
                    },
                    PreviewChapter {
                        label: "Chapter 2".into(),
                        title: "Principles That Make It Work".into(),
                        lines: vec![88, 76, 64],
                    },
                ],
                modes_label: "Edit Mode".into(),
                modes: strings(&["Light polish", "Bestseller format", "Academic clarity"]),
                primary_action: "Generate draft".into(),
                secondary_action: "Export".into(),
            },
        },
        sections: SectionCopy {
            how: SectionHeading::new("Speak it once. Build it into a book.")
                .eyebrow("How it works")
                .description("A simple workflow designed for real life: quick capture, clean structure, easy export."),
            features: SectionHeading::new("Everything you need to go from audio to manuscript")
                .eyebrow("Features")
                .description("Built to preserve your voice while making your writing clean, structured, and ready to publish."),
            testimonials: SectionHeading::new("People write faster when the friction disappears")
                .eyebrow("Results")
                .description("Early creators, speakers and ministry teams on what changed once the blank page went away."),
            pricing: SectionHeading::new("Pick a plan that matches your writing pace")
                .eyebrow("Pricing")
                .description("Start free. Upgrade when you’re ready to scale minutes, features, or collaboration."),
            examples: SectionHeading::new("From raw audio to clean pages")
                .eyebrow("Examples")
                .description("What a finished draft looks like when a talk or an outline goes in."),
            faq: SectionHeading::new("Questions you might have")
                .eyebrow("FAQ")
                .description("Short answers to what people ask before their first recording."),
            featured_badge: "Most popular".into(),
        },
        steps: vec![
            StepRecord {
                ordinal: "01".into(),
                title: "Record or upload".into(),
                description: "Use your phone, laptop mic, or upload audio/video files.".into(),
                icon: IconRef::FileAudio,
            },
            StepRecord {
                ordinal: "02".into(),
                title: "Transcribe + organize".into(),
                description: "ReadyWrite converts speech to text and structures it into readable sections.".into(),
                icon: IconRef::Sparkles,
            },
            StepRecord {
                ordinal: "03".into(),
                title: "Refine + export".into(),
                description: "Polish your draft, add scripture/quotes/notes, then export and publish.".into(),
                icon: IconRef::Download,
            },
        ],
        features: vec![
            FeatureRecord {
                icon: IconRef::Mic,
                title: "Voice-first writing".into(),
                description: "Capture ideas fast by speaking naturally—no blank page intimidation.".into(),
            },
            FeatureRecord {
                icon: IconRef::Sparkles,
                title: "Voice-preserving edits".into(),
                description: "Clean grammar and flow while keeping your tone, rhythm, and meaning.".into(),
            },
            FeatureRecord {
                icon: IconRef::BookOpen,
                title: "Auto chapters & structure".into(),
                description: "Organizes long recordings into headings, sections, and chapters automatically.".into(),
            },
            FeatureRecord {
                icon: IconRef::ShieldCheck,
                title: "Private by design".into(),
                description: "Your drafts are yours—built with privacy, security, and control in mind.".into(),
            },
            FeatureRecord {
                icon: IconRef::Wand,
                title: "Smart rewriting options".into(),
                description: "Choose: light polish, bestseller-style formatting, or academic-level clarity.".into(),
            },
        ],
        use_cases: UseCases {
            title: "Use cases".into(),
            audiences: "Authors • Preachers • Coaches • Teachers • Creators".into(),
            tags: strings(&[
                "Sermon → Book",
                "Podcast → Chapters",
                "Notes → Manuscript",
                "Course → Workbook",
            ]),
        },
        testimonials: vec![
            Testimonial {
                quote: "I spoke my thoughts in one night and woke up to a structured draft with chapters. That’s wild.".into(),
                attribution: "Creator / Author".into(),
            },
            Testimonial {
                quote: "The edits kept my voice. It didn’t feel like AI wrote it—felt like me on my best day.".into(),
                attribution: "Speaker".into(),
            },
            Testimonial {
                quote: "We turned sermons into book-ready text without losing the message. The time saved is real.".into(),
                attribution: "Ministry Team".into(),
            },
        ],
        pricing: vec![
            PricingTier {
                name: "Starter".into(),
                price: "$0".into(),
                period: String::new(),
                description: "Perfect to test the workflow.".into(),
                highlighted: false,
                benefits: strings(&[
                    "Limited monthly minutes",
                    "Basic transcription",
                    "Simple formatting",
                    "Export: DOCX",
                ]),
                cta: "Start Free".into(),
            },
            PricingTier {
                name: "Pro".into(),
                price: "$19".into(),
                period: "/mo".into(),
                description: "For creators building consistently.".into(),
                highlighted: true,
                benefits: strings(&[
                    "More minutes + faster processing",
                    "Voice-preserving edit modes",
                    "Auto chapters + TOC",
                    "Exports: DOCX + Google Docs",
                    "Priority support",
                ]),
                cta: "Go Pro".into(),
            },
            PricingTier {
                name: "Team".into(),
                price: "$49".into(),
                period: "/mo".into(),
                description: "For ministries, teams, and agencies.".into(),
                highlighted: false,
                benefits: strings(&[
                    "Multiple seats",
                    "Shared projects",
                    "Version history",
                    "Exports: DOCX + PDF",
                    "Team support",
                ]),
                cta: "Contact Sales".into(),
            },
        ],
        examples: vec![
            ExampleShowcase {
                title: "Sermon → Book draft".into(),
                tag: "Ministry".into(),
                description: "Upload a sermon, auto-extract themes, then generate chapters with a table of contents.".into(),
                preview_label: "Output preview".into(),
                lines: vec![90, 86, 78, 68],
            },
            ExampleShowcase {
                title: "Notes → Manuscript".into(),
                tag: "Author".into(),
                description: "Speak your outline, then let ReadyWrite create readable sections and transitions.".into(),
                preview_label: "Output preview".into(),
                lines: vec![88, 82, 74, 60],
            },
        ],
        lead: LeadCopy {
            title: "Get launch updates".into(),
            description: "Want early access or a demo walkthrough? Drop your email and we’ll send the next steps.".into(),
            perks: strings(&["Early access", "Demo invite", "Pricing updates"]),
            email_label: "Email".into(),
            placeholder: "you@example.com".into(),
            button: "Notify me".into(),
            fine_print: "No spam. Unsubscribe anytime.".into(),
        },
        faq: vec![
            FaqEntry {
                question: "Does ReadyWrite change my voice or message?".into(),
                answer: "No—by default it preserves your tone. You choose how strong the edits are: light polish, clear rewrite, or advanced formatting.".into(),
            },
            FaqEntry {
                question: "Can I use it for sermons and teaching?".into(),
                answer: "Yes. It’s built for long-form speech like sermons, lectures, podcasts, and coaching sessions.".into(),
            },
            FaqEntry {
                question: "What can I export to?".into(),
                answer: "Common exports include DOCX and Google Docs. You can also format for PDF-ready publishing depending on your plan.".into(),
            },
            FaqEntry {
                question: "Do I need special equipment?".into(),
                answer: "No. Phone recordings work. Better audio improves accuracy, but the workflow is designed to be simple.".into(),
            },
        ],
        footer: FooterContent {
            blurb: "ReadyWrite helps you go from voice to manuscript—fast.".into(),
            product_heading: "Product".into(),
            company_heading: "Company".into(),
            contact_heading: "Contact".into(),
            company_links: vec![
                ExternalLink { label: "About".into(), href: "/about".into() },
                ExternalLink { label: "Privacy".into(), href: "/privacy".into() },
                ExternalLink { label: "Terms".into(), href: "/terms".into() },
            ],
            contact: ContactDetails {
                email: "support@readywrite.app".into(),
                phone: "(000) 000-0000".into(),
                location: "Battle Creek, MI".into(),
            },
            demo_label: "Watch demo".into(),
        },
    }
}
