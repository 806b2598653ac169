//! Static challenge catalog.

use crate::model::{Difficulty, Language, Level};

/// Level whose real objective is hidden: any submission is a perfect score.
pub const DISCOVERY_LEVEL_ID: &str = "0-1";

/// First tutorial level, offered by the tutorial prompt.
pub const TUTORIAL_START_ID: &str = "0-0";

pub const DISCOVERY_OBJECTIVE: &str = "Submit any text at all to see how the system gives you feedback. Once you submit, I will tell you the secret goal was just to learn how to click submit.";

pub static LEVELS: &[Level] = &[
    Level {
        id: "0-0",
        chapter: 0,
        sub_chapter: 0,
        title: "Buffer Calibration",
        language: Language::Html,
        description: "Welcome, operative. Before we begin, we must calibrate your neural interface. Type the following text exactly as shown to verify your input buffer: \"I am ready to encode.\"",
        simple_description: "Welcome! To start, please type \"I am ready to encode.\" in the box below to make sure your keyboard is working correctly.",
        objective: "Type: I am ready to encode.",
        simple_objective: "Type \"I am ready to encode.\" exactly as it appears.",
        target_output: "I am ready to encode.",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-1",
        chapter: 0,
        sub_chapter: 1,
        title: "Evaluation Discovery",
        language: Language::Html,
        description: "The Project EnCode system uses advanced AI to evaluate your work. For this task, type anything in the editor (even a random word) and hit SUBMIT. The AI will then reveal your hidden objective.",
        simple_description: "In this game, an AI checks your work. Try typing anything you want in the editor and click \"Check Answer\" to see how the feedback system works.",
        objective: "Submit any text to reveal the secret objective.",
        simple_objective: "Type any message and click \"Check Answer\".",
        target_output: "You discovered how the AI evaluation works!",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-2",
        chapter: 0,
        sub_chapter: 2,
        title: "HTML: The Shell",
        language: Language::Html,
        description: "HTML tags define the structure. Create an <h1> tag with the text \"Hello Terminal\" to initialize your first viewport element.",
        simple_description: "HTML tags are used to build websites. Use an <h1> tag to make a title that says \"Hello Terminal\".",
        objective: "Create an <h1> tag containing \"Hello Terminal\".",
        simple_objective: "Write <h1>Hello Terminal</h1> in the box.",
        target_output: "<h1>Hello Terminal</h1>",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-3",
        chapter: 0,
        sub_chapter: 3,
        title: "HTML: Paragraphs",
        language: Language::Html,
        description: "The <p> tag is used for text blocks. Create a paragraph containing the status code \"SYSTEM_NORMAL\".",
        simple_description: "The <p> tag is for regular text. Make a paragraph that says \"SYSTEM_NORMAL\".",
        objective: "Create a <p> tag containing \"SYSTEM_NORMAL\".",
        simple_objective: "Write <p>SYSTEM_NORMAL</p> in the box.",
        target_output: "<p>SYSTEM_NORMAL</p>",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-4",
        chapter: 0,
        sub_chapter: 4,
        title: "CSS: Colorization",
        language: Language::Css,
        description: "CSS rules target elements. Target the \"body\" and set the \"color\" to \"green\". Ensure your syntax includes the braces and semicolon.",
        simple_description: "CSS changes how your page looks. Change the text color of the \"body\" to \"green\".",
        objective: "Apply: body { color: green; }",
        simple_objective: "Write body { color: green; } in the style box.",
        target_output: "body { color: green; }",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-5",
        chapter: 0,
        sub_chapter: 5,
        title: "CSS: Backgrounds",
        language: Language::Css,
        description: "A darker buffer reduces eye strain. Set the \"background-color\" of the \"body\" to \"black\".",
        simple_description: "Change the background color of the \"body\" to \"black\".",
        objective: "Apply: body { background-color: black; }",
        simple_objective: "Write body { background-color: black; } in the style box.",
        target_output: "body { background-color: black; }",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-6",
        chapter: 0,
        sub_chapter: 6,
        title: "JS: Variables",
        language: Language::JavaScript,
        description: "Variables store logic states. Declare a variable \"id\" and set it to the number \"101\".",
        simple_description: "JavaScript stores information in variables. Create a variable called \"id\" and set it to 101.",
        objective: "Write: let id = 101;",
        simple_objective: "Write let id = 101; in the script box.",
        target_output: "let id = 101;",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-7",
        chapter: 0,
        sub_chapter: 7,
        title: "JS: Basic Math",
        language: Language::JavaScript,
        description: "Perform a calculation. Create a variable \"total\" that stores the result of \"5 + 10\".",
        simple_description: "JavaScript can do math. Create a variable called \"total\" and set it to the result of 5 plus 10.",
        objective: "Write: let total = 5 + 10;",
        simple_objective: "Write let total = 5 + 10; in the script box.",
        target_output: "let total = 15;",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-8",
        chapter: 0,
        sub_chapter: 8,
        title: "C++: Standard Output",
        language: Language::Cpp,
        description: "In C++, we use \"std::cout\" to print text. Output the word \"INITIALIZED\" to the console stream.",
        simple_description: "In C++, use \"std::cout\" to show text on the screen. Print the word \"INITIALIZED\".",
        objective: "Write: std::cout << \"INITIALIZED\";",
        simple_objective: "Write std::cout << \"INITIALIZED\"; in the box.",
        target_output: "std::cout << \"INITIALIZED\";",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-9",
        chapter: 0,
        sub_chapter: 9,
        title: "C++: Integer Logic",
        language: Language::Cpp,
        description: "Declare an integer variable \"x\" and assign it \"50\". C++ requires strict type definitions.",
        simple_description: "In C++, you must say a variable is an integer (int). Create an \"int\" named \"x\" and set it to 50.",
        objective: "Write: int x = 50;",
        simple_objective: "Write int x = 50; in the box.",
        target_output: "int x = 50;",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-10",
        chapter: 0,
        sub_chapter: 10,
        title: "C++: Math Operations",
        language: Language::Cpp,
        description: "C++ can calculate values. Create an integer \"result\" and store the value of \"100 / 4\".",
        simple_description: "Calculate 100 divided by 4 and store it in an integer called \"result\".",
        objective: "Write: int result = 100 / 4;",
        simple_objective: "Write int result = 100 / 4; in the box.",
        target_output: "int result = 25;",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "0-11",
        chapter: 0,
        sub_chapter: 11,
        title: "C++: Basic If/Else",
        language: Language::Cpp,
        description: "Use an \"if\" statement to check if a variable \"temp\" is greater than \"100\". If so, print \"HOT\".",
        simple_description: "Use an \"if\" statement to check if \"temp\" is over 100. If it is, show the word \"HOT\".",
        objective: "Write: if (temp > 100) { std::cout << \"HOT\"; }",
        simple_objective: "Write an if-statement that prints \"HOT\" if temp is greater than 100.",
        target_output: "if (temp > 100) { std::cout << \"HOT\"; }",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "1-1",
        chapter: 1,
        sub_chapter: 1,
        title: "Project Branding",
        language: Language::Html,
        description: "ANONYMOUS_REQUEST: \"We need a header facade for the hub. Header must read 'Project EnCode'. Include a descriptive paragraph below it.\"",
        simple_description: "Make a website title that says \"Project EnCode\" and add a short paragraph describing the project.",
        objective: "Render an <h1> with \"Project EnCode\" and a <p> tag with descriptive text.",
        simple_objective: "Create a heading with <h1> and a sentence with <p>.",
        target_output: "<h1>Project EnCode</h1><p>Welcome to the game.</p>",
        difficulty: Difficulty::Easy,
    },
    Level {
        id: "1-2",
        chapter: 1,
        sub_chapter: 2,
        title: "Navigation Matrix",
        language: Language::Html,
        description: "NODE_OPERATOR: \"Users are getting lost in the sub-grids. Construct a navigation list using the <ul> and <li> tags. Links should read: 'HOME', 'LOGS', 'EXIT'.\"",
        simple_description: "Create a list of links for a website. Use a bulleted list (<ul>) with three items (<li>): HOME, LOGS, and EXIT.",
        objective: "Create a <ul> list with three <li> items containing: HOME, LOGS, EXIT.",
        simple_objective: "Make a bulleted list with 3 items: HOME, LOGS, EXIT.",
        target_output: "<ul><li>HOME</li><li>LOGS</li><li>EXIT</li></ul>",
        difficulty: Difficulty::Medium,
    },
    Level {
        id: "1-3",
        chapter: 1,
        sub_chapter: 3,
        title: "Digital Glow",
        language: Language::Css,
        description: "STYLING_PROXY: \"The terminal looks too flat. Apply a cyan glow to all <h1> headers. Use the text-shadow property with a 5px blur.\"",
        simple_description: "Make the titles on the page look like they are glowing. Add a \"text-shadow\" to <h1> tags that is cyan and has a blur of 5px.",
        objective: "Apply: h1 { text-shadow: 0 0 5px cyan; }",
        simple_objective: "Write a CSS rule to make <h1> headers glow cyan.",
        target_output: "h1 { text-shadow: 0 0 5px cyan; }",
        difficulty: Difficulty::Medium,
    },
    Level {
        id: "2-1",
        chapter: 2,
        sub_chapter: 1,
        title: "Access Control",
        language: Language::JavaScript,
        description: "SECURITY_DAEMON: \"Unauthorized entities are attempting access. Write a script that checks a variable 'clearance_level'. If it is 5 or higher, set a variable 'access_granted' to true.\"",
        simple_description: "Create a security check. If the clearance level is 5 or more, give the user access.",
        objective: "Write: if (clearance_level >= 5) { let access_granted = true; }",
        simple_objective: "Write an if-statement that checks if clearance_level is at least 5.",
        target_output: "if (clearance_level >= 5) { access_granted = true; }",
        difficulty: Difficulty::Medium,
    },
    Level {
        id: "2-2",
        chapter: 2,
        sub_chapter: 2,
        title: "Loop Relay",
        language: Language::JavaScript,
        description: "COMM_REPEATER: \"We need to send a ping signal multiple times. Write a for-loop that executes 3 times. In each loop, add 1 to a variable named 'signal_count'.\"",
        simple_description: "Use a loop to count to 3. Each time the loop runs, add 1 to a variable called \"signal_count\".",
        objective: "Write a for-loop that repeats 3 times and increments signal_count.",
        simple_objective: "Create a for-loop that runs 3 times.",
        target_output: "for (let i = 0; i < 3; i++) { signal_count++; }",
        difficulty: Difficulty::Hard,
    },
    Level {
        id: "3-1",
        chapter: 3,
        sub_chapter: 1,
        title: "Reactor Safety",
        language: Language::Cpp,
        description: "GRID_CONTROL: \"Reactor heat is fluctuating. Create a C++ program that checks if an integer 'core_temp' is greater than 500. If it is, output 'WARNING' using std::cout.\"",
        simple_description: "Monitor a reactor. If the core temperature is higher than 500, print the word \"WARNING\" to the screen.",
        objective: "Write: if (core_temp > 500) { std::cout << \"WARNING\"; }",
        simple_objective: "Write an if-statement that prints WARNING if core_temp is over 500.",
        target_output: "if (core_temp > 500) { std::cout << \"WARNING\"; }",
        difficulty: Difficulty::Medium,
    },
    Level {
        id: "3-2",
        chapter: 3,
        sub_chapter: 2,
        title: "Efficiency Calculator",
        language: Language::Cpp,
        description: "SYSTEM_ARCHITECT: \"We need to calculate node efficiency. Multiply the variables 'base_power' and 'efficiency_ratio' (both integers), and output the result.\"",
        simple_description: "Create a calculator that multiplies base power by the efficiency ratio and shows the answer.",
        objective: "Write: std::cout << base_power * efficiency_ratio;",
        simple_objective: "Multiply base_power by efficiency_ratio and print it.",
        target_output: "std::cout << base_power * efficiency_ratio;",
        difficulty: Difficulty::Hard,
    },];

/// Chapter headings as (immersive, plain) pairs.
pub fn chapter_name(chapter: u32, plain: bool) -> &'static str {
    let (immersive, simple) = match chapter {
        0 => ("SYSTEM INITIALIZATION", "Tutorials"),
        1 => ("WEB BASICS", "Web Design"),
        2 => ("ALGORITHMIC LOGIC", "Programming Logic"),
        3 => ("SYSTEMS ARCHITECTURE", "Advanced Systems"),
        _ => ("UNMAPPED SECTOR", "Extra"),
    };
    if plain { simple } else { immersive }
}

pub const QUOTES: &[&str] = &[
    "It works on my machine.",
    "There are 10 types of people in the world...",
    "Premature optimization is the root of all evil.",
    "Have you tried turning it off and on again?",
    "Refactoring: Cleaning the kitchen while cooking.",
];

pub fn find_level(id: &str) -> Option<&'static Level> {
    LEVELS.iter().find(|l| l.id == id)
}

pub fn is_discovery(level: &Level) -> bool {
    level.id == DISCOVERY_LEVEL_ID
}

/// Levels grouped by chapter in catalog order.
pub fn chapters() -> Vec<(u32, Vec<&'static Level>)> {
    let mut out: Vec<(u32, Vec<&'static Level>)> = Vec::new();
    for level in LEVELS {
        match out.last_mut() {
            Some((ch, levels)) if *ch == level.chapter => levels.push(level),
            _ => out.push((level.chapter, vec![level])),
        }
    }
    out
}
