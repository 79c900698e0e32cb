pub mod resume;

pub use resume::{
    Achievement, Address, Avatar, Certification, Contact, CustomItem, CustomSection, Dated,
    Education, Gpa, GpaKind, LinkRef, Project, ResumeDocument, SkillCategory, SkillItem,
    SocialLink, WorkExperience,
};
