//! Fixed option lists: project categories and the default skill catalog.

/// Project categories offered when publishing a project
pub const CATEGORIES: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Game Development",
    "AI & Machine Learning",
    "Data Visualization",
    "IoT",
    "Blockchain",
    "AR/VR",
    "Design",
    "Productivity",
    "Education",
    "Entertainment",
];

/// Suggested technologies and skills for the profile skill picker.
///
/// Order matters: the tag selector lists suggestions in this order.
pub const TECHNOLOGIES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Svelte",
    "Next.js",
    "Node.js",
    "Deno",
    "Python",
    "Django",
    "Flask",
    "FastAPI",
    "Go",
    "Rust",
    "Java",
    "Kotlin",
    "Swift",
    "C#",
    "C++",
    "Ruby",
    "Ruby on Rails",
    "PHP",
    "Laravel",
    "GraphQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Docker",
    "Kubernetes",
    "AWS",
    "Google Cloud",
    "Azure",
    "Firebase",
    "Supabase",
    "TensorFlow",
    "PyTorch",
    "Tailwind CSS",
    "Figma",
    "Unity",
    "Solidity",
];

/// The default skill catalog as owned strings
pub fn default_catalog() -> Vec<String> {
    TECHNOLOGIES.iter().map(|s| s.to_string()).collect()
}
