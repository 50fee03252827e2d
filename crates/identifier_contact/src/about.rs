//! About page content.

use crate::nav_links;
use std::fmt;

/// Page heading.
pub const ABOUT_TITLE: &str = "About Object Identifier";

/// One titled block of the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutSection {
    /// Section heading
    pub heading: &'static str,
    /// Section text
    pub body: &'static str,
}

const SECTIONS: [AboutSection; 5] = [
    AboutSection {
        heading: "Our Mission",
        body: "Object Identifier leverages cutting-edge AI technology to help users identify \
               and learn about objects in their surroundings. Our mission is to make object \
               recognition technology accessible and useful for everyone.",
    },
    AboutSection {
        heading: "How It Works",
        body: "Using Google's Gemini vision models, the application analyzes an image and \
               provides detailed information about the objects in it, including their \
               features, characteristics, and potential uses. Whether you're a student, \
               professional, or just curious about the world around you, the tool is designed \
               to help you learn more about any object you encounter.",
    },
    AboutSection {
        heading: "Technology",
        body: "The application is written in Rust on the tokio runtime. Images are read from \
               disk or captured from a webcam, encoded in memory, and sent to the Gemini \
               generateContent API over HTTPS.",
    },
    AboutSection {
        heading: "Privacy & Security",
        body: "We take your privacy seriously. Images are processed in memory and are never \
               stored. All analysis is performed in real-time using encrypted connections to \
               ensure your data remains protected.",
    },
    AboutSection {
        heading: "Creator",
        body: "This piece of software was created by Afiq (https://instagram.com/4fiq.x).",
    },
];

/// The About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutPage {
    /// Page heading
    pub title: &'static str,
    /// Sections in display order
    pub sections: &'static [AboutSection],
}

impl AboutPage {
    /// The fixed About page.
    pub fn new() -> Self {
        Self {
            title: ABOUT_TITLE,
            sections: &SECTIONS,
        }
    }

    /// Looks up a section by heading.
    pub fn section(&self, heading: &str) -> Option<&AboutSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

impl Default for AboutPage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AboutPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let links: Vec<&str> = nav_links().iter().map(|l| l.label).collect();
        writeln!(f, "{}", links.join(" | "))?;
        writeln!(f)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        for section in self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            writeln!(f, "{}", "-".repeat(section.heading.len()))?;
            writeln!(f, "{}", section.body)?;
        }
        Ok(())
    }
}
