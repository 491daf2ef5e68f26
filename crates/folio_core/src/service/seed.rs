//! Default content loaded when a session starts.

use crate::model::contact::ContactLink;
use crate::model::profile::ProfileFields;
use crate::model::project::{Project, ProjectKind, ProjectYear};
use crate::model::skill::{Achievement, Skill};
use crate::model::testimonial::Testimonial;
use crate::model::timeline::TimelineEvent;

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Data Analysis Project",
            ProjectKind::Individual,
            ProjectYear::Year2,
            "A project analyzing trends of Rwanda GDP accounts using Pandas and Matplotlib",
            "https://github.com/username/data-analysis",
        ),
        Project::new(
            "AI Chatbot",
            ProjectKind::Group,
            ProjectYear::Year3,
            "Developed an AI-Powered chatbot using Python and NLP Techniques",
            "https://github.com/username/ai-chatbot",
        ),
        Project::new(
            "Caritas CDJP Gikongoro Website",
            ProjectKind::Internship,
            ProjectYear::Year3,
            "Designed and developed a website for Caritas Gikongoro using WordPress CMS",
            "https://github.com/username/caritas-website",
        ),
        Project::new(
            "AI-Based Student Attendance System",
            ProjectKind::Dissertation,
            ProjectYear::FinalYear,
            "Working on a facial recognition system to automate student attendance tracking for INES-Ruhengeri",
            "https://github.com/username/attendance-system",
        ),
    ]
}

pub fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Dr. Theodore",
            "Professor, AI Department",
            "Fidella is a brilliant problem solver! Her final year project was truly innovative.",
        ),
        Testimonial::new(
            "Diane K.",
            "Classmate",
            "Working with Fidella on group projects has been a great experience. She's dedicated and brings creative solutions to difficult problems.",
        ),
    ]
}

pub fn seed_timeline() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent::new(
            "2023",
            "First Python project completed ✅",
            "Created a simple data analysis tool",
        ),
        TimelineEvent::new(
            "2023",
            "Joined AI research club 🔍",
            "Started working on NLP projects",
        ),
        TimelineEvent::new(
            "2024",
            "Hackathon participation 🏆",
            "Won 2nd place in the university coding challenge",
        ),
        TimelineEvent::new(
            "2024",
            "Summer internship at a local tech company 💼",
            "Worked on web development projects",
        ),
        TimelineEvent::new(
            "2025",
            "Dissertation underway 📖",
            "Working on AI-Based Student Attendance System",
        ),
    ]
}

pub fn seed_profile() -> ProfileFields {
    ProfileFields {
        name: "Fidella I.".to_string(),
        location: "Musanze, Rwanda".to_string(),
        field_of_study: "BSc Computer Science, Year 3".to_string(),
        university: "INES - Ruhengeri".to_string(),
        bio: "I am a passionate AI and software engineering student at INES-Ruhengeri. \
              My interests span machine learning, web development, and data analysis. \
              I enjoy solving complex problems and building applications that make a positive impact. \
              Currently, I'm working on my dissertation focused on an AI-based student attendance system using facial recognition. \
              I'm seeking opportunities to apply my skills in real-world scenarios through internships and collaborative projects."
            .to_string(),
    }
}

pub fn seed_skills() -> Vec<Skill> {
    vec![
        Skill::new("Python", 90),
        Skill::new("JavaScript", 75),
        Skill::new("Artificial Intelligence", 65),
        Skill::new("HTML & CSS", 85),
        Skill::new("SQL", 70),
        Skill::new("Data Analysis", 80),
    ]
}

pub fn seed_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new("Completed AI & ML in Business Certification"),
        Achievement::new("Certified in AI for Research and Course Preparation for Education"),
        Achievement::new("2nd Place in University Coding Challenge 2024"),
        Achievement::new("Contributing Member of INES AI Research Group"),
    ]
}

/// Static "connect with me" links; not part of session storage.
pub fn contact_links() -> Vec<ContactLink> {
    vec![
        ContactLink::new("Email", "mailto:mclement@ines.ac.rw"),
        ContactLink::new("LinkedIn", "https://linkedin.com/in/username"),
        ContactLink::new("GitHub", "https://github.com/username"),
        ContactLink::new("Personal Website", "https://myportfolio.com"),
    ]
}
