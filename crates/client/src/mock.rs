//! The built-in fallback catalog, served whenever the content API is
//! unconfigured, unreachable, or empty.
use crate::course::{Course, CourseStatus};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The three fallback courses, in the order the site lists them.
pub fn mock_courses() -> Vec<Course> {
    vec![
        Course {
            id: "vibe-coding".to_owned(),
            title: "Vibe Coding".to_owned(),
            description: "Learn to code with the right aesthetic and mindset. Blend programming with artistic expression.".to_owned(),
            long_description: "A comprehensive course on coding with style and purpose. Learn to create beautiful, functional code that expresses your unique perspective.".to_owned(),
            image: "/placeholder.svg?height=400&width=600".to_owned(),
            duration: "8 weeks".to_owned(),
            status: CourseStatus::Active,
            price: 199.0,
            highlights: strings(&[
                "Aesthetic-driven development",
                "Creative coding principles",
                "Building beautiful interfaces",
                "Finding your coding style",
            ]),
            created: None,
        },
        Course {
            id: "stable-diffusion".to_owned(),
            title: "Stable Diffusion Mastery".to_owned(),
            description: "Create stunning AI-generated art with stable diffusion. From prompts to fine-tuning models.".to_owned(),
            long_description: "Master the art of AI image generation with Stable Diffusion. Learn prompt engineering, model fine-tuning, and how to create consistent styles.".to_owned(),
            image: "/placeholder.svg?height=400&width=600".to_owned(),
            duration: "6 weeks".to_owned(),
            status: CourseStatus::Active,
            price: 249.0,
            highlights: strings(&[
                "Prompt engineering",
                "Model fine-tuning",
                "Creating consistent styles",
                "Building an AI art portfolio",
            ]),
            created: None,
        },
        Course {
            id: "tech-entrepreneurship".to_owned(),
            title: "Technology-Based Entrepreneurship".to_owned(),
            description: "Build and launch your tech startup. From idea validation to market entry strategies.".to_owned(),
            long_description: "Learn how to turn your tech skills into a successful business. This course covers everything from idea validation to market entry strategies.".to_owned(),
            image: "/placeholder.svg?height=400&width=600".to_owned(),
            duration: "12 weeks".to_owned(),
            status: CourseStatus::Finished,
            price: 349.0,
            highlights: strings(&[
                "Idea validation",
                "MVP development",
                "Market strategies",
                "Fundraising techniques",
            ]),
            created: None,
        },
    ]
}
