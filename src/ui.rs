use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portfolio_site::markup::{Element, Node};
use portfolio_site::navigation::{Anchor, NavShell, NAV_ITEMS};
use portfolio_site::{footer_text, render_page, ContentRegistry};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

const SCROLL_STEP: u16 = 1;
const PAGE_STEP: u16 = 10;

fn tab_label(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Home => "Início",
        other => NAV_ITEMS
            .iter()
            .find(|item| item.anchor == other)
            .map(|item| item.label)
            .unwrap_or("?"),
    }
}

fn anchor_index(anchor: Anchor) -> usize {
    Anchor::ALL.iter().position(|a| *a == anchor).unwrap_or(0)
}

pub struct App {
    pub page: Node,
    pub footer: String,
    pub current: Anchor,
    pub shell: NavShell,
    pub scroll: u16,
}

impl App {
    pub fn new(registry: &ContentRegistry, year: i32) -> Self {
        let shell = NavShell::new();
        Self {
            page: render_page(registry, &shell, year),
            footer: footer_text(&registry.contact.name, year),
            current: Anchor::Home,
            shell,
            scroll: 0,
        }
    }

    pub fn go_to(&mut self, anchor: Anchor) {
        self.current = anchor;
        self.scroll = 0;
    }

    pub fn next_section(&mut self) {
        let i = (anchor_index(self.current) + 1) % Anchor::ALL.len();
        self.go_to(Anchor::ALL[i]);
    }

    pub fn previous_section(&mut self) {
        let len = Anchor::ALL.len();
        let i = (anchor_index(self.current) + len - 1) % len;
        self.go_to(Anchor::ALL[i]);
    }

    pub fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by);
    }

    pub fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    /// Activate a header link; the panel closes whichever link it was.
    pub fn follow_link(&mut self, anchor: Anchor) {
        let target = self.shell.activate_link(anchor);
        self.go_to(target);
    }

    /// Lines for the section currently in view
    pub fn current_lines(&self) -> Vec<Line<'static>> {
        self.page
            .find_by_id(self.current.as_str())
            .map(section_lines)
            .unwrap_or_default()
    }

    /// Returns true when the viewer should exit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc if self.shell.is_open() => self.shell.toggle(),
            KeyCode::Esc => return true,
            KeyCode::Char('m') => self.shell.toggle(),
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => self.previous_section(),
            KeyCode::BackTab => self.previous_section(),
            KeyCode::Tab => self.next_section(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.follow_link(NAV_ITEMS[index].anchor);
            }
            KeyCode::Up if self.shell.is_open() => self.shell.select_previous(),
            KeyCode::Down if self.shell.is_open() => self.shell.select_next(),
            KeyCode::Enter if self.shell.is_open() => {
                let target = self.shell.activate_focused();
                self.go_to(target);
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(SCROLL_STEP),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(SCROLL_STEP),
            KeyCode::PageDown => self.scroll_down(PAGE_STEP),
            KeyCode::PageUp => self.scroll_up(PAGE_STEP),
            KeyCode::Home => self.go_to(Anchor::Home),
            _ => {}
        }
        false
    }
}

// ============================================================================
// Tree -> terminal lines
// ============================================================================

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn push(&mut self, span: Span<'static>) {
        self.current.push(span);
    }

    fn block_line(&mut self, text: String, style: Style) {
        self.flush();
        self.lines.push(Line::from(Span::styled(text, style)));
    }

    fn blank(&mut self) {
        self.flush();
        if self.lines.last().map(|l| !l.spans.is_empty()).unwrap_or(false) {
            self.lines.push(Line::default());
        }
    }

    fn walk(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.push(Span::raw(text.clone())),
            Node::Fragment(nodes) => nodes.iter().for_each(|n| self.walk(n)),
            Node::Element(el) => self.element(el),
        }
    }

    fn element(&mut self, el: &Element) {
        match el.tag {
            "svg" => {}
            "h1" | "h2" => {
                self.block_line(
                    el.text_content(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                );
                self.blank();
            }
            "h3" => self.block_line(
                el.text_content(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            "li" => {
                self.flush();
                self.push(Span::raw("  • "));
                self.children(el);
                self.flush();
            }
            "span" if el.has_class("badge") => {
                self.push(Span::styled(
                    format!("[{}]", el.text_content()),
                    Style::default().fg(Color::Cyan),
                ));
                self.push(Span::raw(" "));
            }
            "a" => {
                self.push(Span::styled(
                    el.text_content().trim().to_string(),
                    Style::default().fg(Color::LightBlue).add_modifier(Modifier::UNDERLINED),
                ));
                if let Some(href) = el.get_attr("href").filter(|h| !h.starts_with('#')) {
                    self.push(Span::styled(
                        format!(" <{}>", href),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                self.push(Span::raw("   "));
            }
            "div" if el.has_class("period") || el.has_class("muted") => self.block_line(
                el.text_content(),
                Style::default().fg(Color::DarkGray),
            ),
            "div" if el.has_class("card") => {
                self.flush();
                self.children(el);
                self.blank();
            }
            _ => {
                self.flush();
                self.children(el);
                self.flush();
            }
        }
    }

    fn children(&mut self, el: &Element) {
        el.children.iter().for_each(|n| self.walk(n));
    }
}

fn section_lines(section: &Element) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::default();
    builder.children(section);
    builder.flush();
    builder.lines
}

// ============================================================================
// Terminal loop
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Section content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_section(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.shell.is_open() {
        render_panel(f, chunks[1], app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, anchor) in Anchor::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *anchor == app.current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(tab_label(*anchor), style));
    }

    let header = Paragraph::new(Line::from(tab_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_section(f: &mut Frame, area: Rect, app: &App) {
    let content = Paragraph::new(app.current_lines())
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" #{} ", app.current.as_str())),
        );

    f.render_widget(content, area);
}

fn render_panel(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.min(28);
    let panel_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: (NAV_ITEMS.len() as u16 + 2).min(area.height),
    };

    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| ListItem::new(format!("{} {}", i + 1, item.label)))
        .collect();

    let focused = NAV_ITEMS
        .iter()
        .position(|item| item.anchor == app.shell.focused().anchor);
    let mut state = ListState::default();
    state.select(focused);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Menu "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("→ ");

    f.render_widget(Clear, panel_area);
    f.render_stateful_widget(list, panel_area, &mut state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut status_spans = vec![key("Tab"), Span::raw(" Section | ")];
    if app.shell.is_open() {
        status_spans.extend([
            key("↑/↓"),
            Span::raw(" Focus | "),
            key("Enter"),
            Span::raw(" Go | "),
            key("Esc"),
            Span::raw(" Close | "),
        ]);
    } else {
        status_spans.extend([
            key("m"),
            Span::raw(" Menu | "),
            key("1-6"),
            Span::raw(" Jump | "),
            key("j/k"),
            Span::raw(" Scroll | "),
        ]);
    }
    status_spans.push(key("q"));
    status_spans.push(Span::raw(" Quit   "));
    status_spans.push(Span::styled(
        app.footer.clone(),
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(Line::from(status_spans))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&ContentRegistry::fixture(), 2028)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_starts_on_home_with_panel_closed() {
        let app = app();
        assert_eq!(app.current, Anchor::Home);
        assert!(!app.shell.is_open());
        assert!(app.footer.contains("2028"));
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut app = app();
        for expected in &Anchor::ALL[1..] {
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.current, *expected);
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current, Anchor::Home);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current, Anchor::Contact);
    }

    #[test]
    fn test_menu_toggle_and_link_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.shell.is_open());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.shell.is_open());
        assert_eq!(app.current, Anchor::Skills);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('4'));
        assert!(!app.shell.is_open());
        assert_eq!(app.current, Anchor::Projects);
    }

    #[test]
    fn test_escape_closes_panel_before_quitting() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));

        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.shell.is_open());
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_scroll_resets_on_jump() {
        let mut app = app();
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll, PAGE_STEP + SCROLL_STEP);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_skills_lines_keep_badge_order() {
        let mut app = app();
        app.go_to(Anchor::Skills);
        let text = plain(&app.current_lines());

        assert_eq!(text[0], "Habilidades");
        let frontend = text.iter().find(|l| l.contains("[JavaScript]")).unwrap();
        assert!(frontend.starts_with("[JavaScript] [TypeScript] [Vue.js] [Nuxt.js] [React]"));
    }

    #[test]
    fn test_contact_lines_show_targets() {
        let mut app = app();
        app.go_to(Anchor::Contact);
        let text = plain(&app.current_lines()).join("\n");

        assert!(text.contains("E-mail <mailto:lucasbarbato80@gmail.com>"));
        assert!(text.contains("GitHub <https://github.com/lucaolv>"));
    }
}
