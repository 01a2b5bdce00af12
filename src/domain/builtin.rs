//! The hand-written backlog drawn when no file is given

use super::item::{Backlog, Direction, Item};

/// Returns the built-in backlog
pub fn builtin_backlog() -> Backlog {
    Backlog::new(vec![
        // Dev environment
        Direction::new(
            "Rust basics",
            vec![
                Item::new("RB1", "Helloworld").done(),
                Item::new("RB2", "fizzbuzz").depends_on(["UT1"]).done(),
                Item::new("RB3", "ls").done(),
                Item::new("RB4", "print branch name using git lib").done(),
                Item::new("RB5", "print HEAD meta-data (author, title, date").done(),
                Item::new("RB6", "git log --oneline").done(),
            ],
        ),
        Direction::new(
            "Unit Tests",
            vec![
                Item::new("UT1", "Unit Tests").done(),
                Item::new("UT2", "Parameterized tests").done(),
                Item::new("UT3", "test main").done(),
                Item::new("UT4", "Setup/TearDown").done(),
                Item::new("UT5", "Mock internal functions").done(),
                Item::new("UT6", "Mock system calls"),
            ],
        ),
        Direction::new(
            "E2E Tests",
            vec![
                Item::new("E2ET1", "End to End tests").done(),
                Item::new("E2ET2", "BDD tests").done(),
            ],
        ),
        Direction::new(
            "Tools",
            vec![
                Item::new("TOOL1", "Linter/Formater"),
                Item::new("TOOL2", "Static Analysis"),
                Item::new("TOOL3", "Code coverage").depends_on(["UT1"]),
                Item::new("TOOL4", "Performances").done(),
            ],
        ),
        Direction::new(
            "Packaging",
            vec![
                Item::new("PACKAGE0", "Semantic Release"),
                Item::new("PACKAGE1", "Linux").done(),
                Item::new("PACKAGE2", "Windows").done(),
                Item::new("PACKAGE3", "Mac").done(),
            ],
        ),
        Direction::new(
            "CI",
            vec![
                Item::new("CI1", "Compilation").done(),
                Item::new("CI2", "Tests").depends_on(["UT1"]).done(),
                Item::new("CI3", "E2E Tests").depends_on(["E2ET1"]).done(),
                Item::new("CI4", "Linter").depends_on(["TOOL1"]),
                Item::new("CI5", "Static Analysis").depends_on(["TOOL2"]),
                Item::new("CI6", "Performances").depends_on(["TOOL3"]),
                Item::new("CI7", "Notifications").done(),
            ],
        ),
        // Metrics
        Direction::new(
            "Size Analysis",
            vec![
                Item::new("SIZE1", "ls git files only").depends_on(["RB3"]),
                Item::new("SIZE2", "Compute file size").done(),
                Item::new("SIZE3", "Structured JSON format").done(),
                Item::new("SIZE4", "Directory score").done(),
            ],
        ),
        Direction::new(
            "Social complexity",
            vec![Item::new("SOCIAL1", "Compute number of authors")
                .depends_on(["SIZE4", "RB4"])
                .done()],
        ),
        Direction::new(
            "Activity",
            vec![
                Item::new("ACTIVITY1", "# of changes last year").depends_on(["RB4"]),
                Item::new("ACTIVITY2", "Follow renames").depends_on(["RB4"]),
                Item::new("ACTIVITY3", "Ignore some commits ?").depends_on(["RB4"]),
            ],
        ),
        Direction::new(
            "Count bugs",
            vec![Item::new("BUG1", "Count fix bug commits").depends_on(["ACTIVITY1"])],
        ),
        // UI
        Direction::new(
            "CLI",
            vec![
                Item::new("CLI1", "UX design"),
                Item::new("CLI2", "--usage").done(),
                Item::new("CLI3", "--version").done(),
                Item::new("CLI4", "Size").depends_on(["SIZE4"]).done(),
                Item::new("CLI5", "Social complexity").depends_on(["SOCIAL1"]).done(),
                Item::new("CLI6", "Activity").depends_on(["ACTIVITY1"]),
                Item::new("CLI7", "Bugs").depends_on(["BUG1"]),
            ],
        ),
        Direction::new(
            "Prototype Native GUI",
            vec![
                Item::new("GUI1", "Application with menu").depends_on(["SIZE3"]),
                Item::new("GUI2", "Draw a rectangle and a circle"),
                Item::new("GUI3", "Fold and unfold rectangle animation"),
                Item::new("GUI4", "Overlay on mouse over"),
            ],
        ),
        Direction::new(
            "Prototype Web GUI",
            vec![
                Item::new("WEBGUI1", "Application with menu").depends_on(["SIZE3"]),
                Item::new("WEBGUI2", "Draw a rectangle and a circle"),
                Item::new("WEBGUI3", "Fold and unfold rectangle animation"),
                Item::new("WEBGUI4", "Overlay on mouse over"),
            ],
        ),
        Direction::new(
            "UI",
            vec![
                Item::new("UI0", "Choose UI solution").depends_on(["GUI4", "WEBGUI4"]),
                Item::new("UI1", "UX design"),
                Item::new("UI2", "Size").depends_on(["SIZE4"]),
                Item::new("UI3", "Social complexity").depends_on(["SOCIAL1"]),
                Item::new("UI4", "Activity").depends_on(["ACTIVITY1"]),
                Item::new("UI5", "Bugs").depends_on(["BUG1"]),
            ],
        ),
        Direction::new(
            "Optimization",
            vec![
                Item::new("OPTI1", "Linux-kernel timings").depends_on(["TOOL4"]).done(),
                Item::new("OPTI2", "optimize bottlenecks").done(),
            ],
        ),
    ])
}
