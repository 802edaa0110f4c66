//! Command-line generator for the Electronic Academy graduation deck.
//!
//! Takes no arguments: the slide content is fixed and the output filename is
//! hard-coded. Run it in the directory the deck should land in.

use chrono::Local;
use env_logger::Env;
use log::info;

use longan::deck::{Composer, SlideContent, Theme};
use longan::pptx::Presentation;

/// The deck is always written here, in the working directory.
const OUTPUT_FILE: &str = "graduation-project.pptx";

const MAIN_TITLE: &str = "مشروع التخرج: الأكاديمية الإلكترونية";

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn contents() -> Vec<SlideContent> {
    let date_stamp = format!("تاريخ العرض: {}", Local::now().format("%Y/%m/%d"));
    vec![
        SlideContent::Title {
            title: MAIN_TITLE.to_string(),
            subtitle: "نظام إدارة تعلم (LMS) متطور يربط المعلم والطالب في بيئة رقمية ذكية"
                .to_string(),
            date_stamp,
        },
        SlideContent::SectionHeader {
            title: "نظرة عامة على المشروع".to_string(),
        },
        SlideContent::Content {
            title: "المقدمة والأهداف".to_string(),
            bullets: lines(&[
                "تمكين المعلمين من إنشاء وبيع دوراتهم التدريبية بسهولة",
                "توفير تجربة تعليمية سلسة وتفاعلية للطلاب",
                "أتمتة العمليات المالية من خلال محفظة إلكترونية مدمجة",
                "دعم المحتوى باللغة العربية بشكل كامل وسهل الاستخدام",
            ]),
        },
        SlideContent::SectionHeader {
            title: "المتطلبات والوظائف".to_string(),
        },
        SlideContent::Content {
            title: "أهم المتطلبات الوظيفية".to_string(),
            bullets: lines(&[
                "نظام إدارة دورات متكامل (إضافة، تعديل، حذف)",
                "لوحة تحكم خاصة لكل من المعلم، الطالب، والمسؤول",
                "نظام اختبارات تفاعلية وتقييم تلقائي",
                "محفظة مالية تتبع المشتريات والاشتراكات",
            ]),
        },
        SlideContent::Architecture,
        SlideContent::SectionHeader {
            title: "الخاتمة والنتائج".to_string(),
        },
        SlideContent::Content {
            title: "لماذا هذا المشروع؟".to_string(),
            bullets: lines(&[
                "حل عصري يواكب التحول الرقمي في التعليم",
                "تقنيات حديثة تضمن السرعة والأمان (Next.js & SSL)",
                "قابلية للتوسع لإضافة ميزات الذكاء الاصطناعي مستقبلاً",
                "استقلالية تامة للمعلم في إدارة محتواه",
            ]),
        },
    ]
}

fn main() -> longan::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let theme = Theme::default();
    let mut pres = Presentation::new();
    pres.set_title(MAIN_TITLE);

    let mut composer = Composer::new(&theme, &mut pres);
    composer.compose(&contents());

    pres.save(OUTPUT_FILE)?;
    info!("generated {OUTPUT_FILE}");
    Ok(())
}
